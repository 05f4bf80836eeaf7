//! Classic leveled compaction and its flush+compact variant
//! 经典分层压缩及其刷盘合并变体

use super::{Strategy, extend_end};
use crate::{State, capacity::max_level_size};

/// Flushes go to L0, which must be empty to accept one. After that every
/// level at or over its max size is compacted into the next non-empty level.
/// 刷盘写入 L0，且 L0 必须为空。之后每个达到上限的层压缩到下一个非空层。
#[derive(Debug, Clone)]
pub struct Leveled {
  max: Vec<u64>,
}

impl Leveled {
  pub fn new(levels: usize, target: u64) -> Self {
    Self {
      max: max_level_size(levels, target),
    }
  }

  #[inline]
  pub fn max_level_size(&self) -> &[u64] {
    &self.max
  }
}

impl Strategy for Leveled {
  fn step(&mut self, s: &mut State) {
    if s.levels[0] == 0 {
      s.flush(0);
      return;
    }

    // Later levels see the result of earlier compactions in the same step.
    // 同一步内，后面的层能看到前面压缩的结果。
    for i in 0..s.level_len() - 1 {
      if s.levels[i] >= self.max[i] {
        let end = extend_end(s, i);
        s.compact(i, end);
      }
    }
  }
}

/// Leveled, but a flush may be merged into the L0 compaction, so L0 may be
/// as large as L1 would be
/// 分层压缩，但刷盘可并入 L0 压缩，因此 L0 可与原 L1 一样大
#[derive(Debug, Clone)]
pub struct FlushLeveled {
  max: Vec<u64>,
}

impl FlushLeveled {
  pub fn new(levels: usize, target: u64) -> Self {
    let mut max = max_level_size(levels, target);
    let n = max.len();
    max.copy_within(1..n, 0);
    Self { max }
  }

  #[inline]
  pub fn max_level_size(&self) -> &[u64] {
    &self.max
  }
}

impl Strategy for FlushLeveled {
  fn step(&mut self, s: &mut State) {
    if s.levels[0] == 0 {
      s.flush(0);
      return;
    }

    let mut flushed = false;
    for i in 0..s.level_len() - 1 {
      if s.levels[i] >= self.max[i] {
        if i == 0 {
          flushed = true;
          s.ingest(0);
        }
        let end = extend_end(s, i);
        s.compact(i, end);
      }
    }
    if !flushed {
      s.flush(0);
    }
  }
}
