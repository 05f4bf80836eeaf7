//! Tiered+leveled compaction (RocksDB style L0 tiers)
//! 分层级+分层压缩（RocksDB 风格的 L0 多 tier）

use super::Strategy;
use crate::{State, capacity::max_level_size};

/// Flushes go to a few tiers. Once all tiers are non-empty they are compacted
/// into the first level and compaction proceeds level by level.
///
/// Not the same as RocksDB `level_compaction_dynamic_level_bytes`, which
/// derives the level count and sizes at runtime.
///
/// 刷盘写入少量 tier。所有 tier 非空后合并到第一层，之后逐层压缩。
/// 与 RocksDB `level_compaction_dynamic_level_bytes` 不同，后者动态计算层数与大小。
#[derive(Debug, Clone)]
pub struct TieredLeveled {
  tiers: usize,
  max: Vec<u64>,
}

/// Tier count for a level count
/// 按层数选择 tier 数
pub fn tiered_leveled_tiers(levels: usize) -> usize {
  match levels {
    0..=5 => 1,
    6..=8 => 2,
    9..=11 => 3,
    _ => 4,
  }
}

impl TieredLeveled {
  /// Panics if `levels < 2`
  /// `levels < 2` 时 panic
  pub fn new(levels: usize, target: u64) -> Self {
    assert!(levels >= 2, "tiered+leveled needs at least 2 levels, got {levels}");
    let tiers = tiered_leveled_tiers(levels);
    Self {
      tiers,
      max: max_level_size(levels - tiers, target),
    }
  }

  #[inline]
  pub fn tiers(&self) -> usize {
    self.tiers
  }

  #[inline]
  pub fn max_level_size(&self) -> &[u64] {
    &self.max
  }
}

impl Strategy for TieredLeveled {
  fn step(&mut self, s: &mut State) {
    let tiers = self.tiers;
    for i in (0..tiers).rev() {
      if s.levels[i] == 0 {
        s.flush(i);
        return;
      }
    }

    s.compact(0, tiers);

    for i in tiers..s.level_len() - 1 {
      if s.levels[i] >= self.max[i - tiers] {
        s.compact(i, i + 1);
      }
    }
  }
}
