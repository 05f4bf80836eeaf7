//! Per-level capacity from a geometric growth factor
//! 基于几何增长因子的每层容量

/// Growth factor search start
/// 增长因子搜索起点
pub const GROWTH_START: f64 = 1.1;

/// Growth factor search step
/// 增长因子搜索步长
pub const GROWTH_STEP: f64 = 0.1;

/// Smallest growth factor m (from 1.1 by 0.1) with 1 + m + ... + m^levels >= target
/// 满足 1 + m + ... + m^levels >= target 的最小增长因子 m（自 1.1 起步长 0.1）
pub fn growth(levels: usize, target: u64) -> f64 {
  // Linear search is enough at these scales.
  let mut m = GROWTH_START;
  loop {
    // 1 + m + m^2 + ... + m^n = (1 - m^(n+1)) / (1 - m)
    let size = ((1.0 - m.powf((levels + 1) as f64)) / (1.0 - m)) as u64;
    if size >= target {
      return m;
    }
    m += GROWTH_STEP;
  }
}

/// Max size of each level: [m^0, m^1, ..., m^(levels-1)], truncated
/// 每层最大大小：[m^0, m^1, ..., m^(levels-1)]，取整
pub fn max_level_size(levels: usize, target: u64) -> Vec<u64> {
  let m = growth(levels, target);
  let mut base = 1.0f64;
  (0..levels)
    .map(|_| {
      let size = base as u64;
      base *= m;
      size
    })
    .collect()
}
