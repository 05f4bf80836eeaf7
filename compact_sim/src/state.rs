//! Level state cost model
//! 层级状态成本模型

/// Per-level resident and written sizes of one run
/// 单次运行中每层的常驻大小与写入量
#[derive(Debug, Clone, PartialEq)]
pub struct State {
  pub(crate) levels: Vec<u64>,
  pub(crate) written: Vec<u64>,
  pub(crate) flushed: u64,
  unit: u64,
  update: f64,
}

impl State {
  pub fn new(levels: usize, unit: u64, update: f64) -> Self {
    Self {
      levels: vec![0; levels],
      written: vec![0; levels],
      flushed: 0,
      unit,
      update,
    }
  }

  /// Resident size per level, L0 first
  /// 每层常驻大小，L0 在前
  #[inline]
  pub fn levels(&self) -> &[u64] {
    &self.levels
  }

  /// Cumulative bytes written per level
  /// 每层累计写入量
  #[inline]
  pub fn written(&self) -> &[u64] {
    &self.written
  }

  #[inline]
  pub fn flushed(&self) -> u64 {
    self.flushed
  }

  #[inline]
  pub fn unit(&self) -> u64 {
    self.unit
  }

  #[inline]
  pub fn level_len(&self) -> usize {
    self.levels.len()
  }

  pub fn total_size(&self) -> u64 {
    self.levels.iter().sum()
  }

  pub fn total_written(&self) -> u64 {
    self.written.iter().sum()
  }

  /// Written over resident size. Only meaningful once the run is near its
  /// target, since the denominator is the current size, not the ingested one.
  /// 写入量 / 常驻大小。分母为当前大小而非累计写入，运行接近目标后才有意义。
  pub fn write_amp(&self) -> f64 {
    let total = self.total_size();
    if total == 0 {
      return 0.0;
    }
    self.total_written() as f64 / total as f64
  }

  /// Share of resident size outside the largest level
  /// 最大层之外的常驻大小占比
  pub fn space_amp(&self) -> f64 {
    let total = self.total_size();
    if total == 0 {
      return 0.0;
    }
    let max = self.levels.iter().copied().max().unwrap_or(0);
    1.0 - max as f64 / total as f64
  }

  /// Flush one unit into `level` and merge it with the level's contents
  /// 刷盘一个单位到 `level` 并与该层已有数据合并
  pub fn flush(&mut self, level: usize) {
    self.ingest(level);
    self.compact(level, level);
  }

  /// Add one unit to `level` without charging a merge; the caller folds it
  /// into a compaction
  /// 向 `level` 加入一个单位但不计合并成本，由调用方并入压缩
  #[inline]
  pub fn ingest(&mut self, level: usize) {
    self.flushed += self.unit;
    self.levels[level] += self.unit;
  }

  /// Merge levels `[start, dest)` into `dest`, returning the size of `dest`
  /// 将 `[start, dest)` 层合并到 `dest`，返回 `dest` 的大小
  pub fn compact(&mut self, start: usize, dest: usize) -> u64 {
    let mut input = 0;
    let mut non_empty = 0;
    for size in &mut self.levels[start..dest] {
      if *size != 0 {
        non_empty += 1;
      }
      input += *size;
      *size = 0;
    }

    // A single input into an empty level is a move: no rewrite, output is
    // exactly the input.
    // 单一输入且目标层为空即为移动：不重写，输出恰为输入。
    if start != dest && non_empty == 1 && self.levels[dest] == 0 {
      self.levels[dest] = input;
      return input;
    }

    let sum = self.levels[dest] + (input as f64 * (1.0 - self.update)) as u64;
    self.levels[dest] = sum;
    self.written[dest] += sum;
    sum
  }
}
