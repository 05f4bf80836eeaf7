//! Balanced rent-or-buy compaction
//! 平衡租买压缩
//!
//! See <https://arxiv.org/pdf/1407.3008.pdf>. The paper only gives rough
//! guidance, so the thresholds below are an interpretation.
//! 论文仅给出粗略指引，以下阈值为一种解读。

use super::Strategy;
use crate::State;

/// Bookkeeping of the last compaction into a level
/// 最近一次压缩到某层的记录
#[derive(Debug, Clone)]
struct LevelInfo {
  /// Size produced by the last compaction into this level
  /// 最近一次压缩到该层产出的大小
  last_cost: u64,
  /// `written` right after that compaction
  /// 该次压缩后的 `written` 快照
  last_written: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct Brb {
  info: Vec<LevelInfo>,
  max_space_amp: Option<f64>,
}

impl Brb {
  /// `max_space_amp` caps the share of data outside the bottom level, in (0, 1]
  /// `max_space_amp` 限制底层之外数据的占比，取值 (0, 1]
  pub fn new(levels: usize, max_space_amp: Option<f64>) -> Self {
    Self {
      info: vec![
        LevelInfo {
          last_cost: 0,
          last_written: vec![0; levels],
        };
        levels
      ],
      max_space_amp,
    }
  }

  #[inline]
  pub fn max_space_amp(&self) -> Option<f64> {
    self.max_space_amp
  }

  /// Bytes written above `level` since its last compaction
  /// 自 `level` 上次压缩以来其上各层的写入量
  fn in_cost(&self, s: &State, level: usize) -> u64 {
    let last = &self.info[level].last_written;
    s.written[..level]
      .iter()
      .zip(last)
      .map(|(&w, &l)| w - l)
      .sum()
  }

  fn compact(&mut self, s: &mut State, dest: usize) {
    let size = s.compact(0, dest);
    let info = &mut self.info[dest];
    info.last_cost = size;
    info.last_written.copy_from_slice(&s.written);
  }

  fn over_space(&self, s: &State) -> bool {
    let Some(max) = self.max_space_amp else {
      return false;
    };
    let total = s.total_size();
    if total == 0 {
      return false;
    }
    let bottom = s.levels[s.level_len() - 1];
    (total - bottom) as f64 / total as f64 >= max
  }
}

impl Strategy for Brb {
  fn step(&mut self, s: &mut State) {
    let n = s.level_len();
    if self.over_space(s) {
      self.compact(s, n - 1);
      return;
    }

    // The flush is not charged here; the compaction below includes it.
    // 此处不计刷盘写入，下方压缩会将其包含在内。
    s.ingest(0);
    for i in 1..=n {
      // Merge down to level i-1 once the work done above level i since its
      // last compaction is less than i times that compaction's cost.
      // 当第 i 层上次压缩以来其上各层的写入量小于该次成本的 i 倍时，合并到 i-1 层。
      if i == n || self.in_cost(s, i) < i as u64 * self.info[i].last_cost {
        self.compact(s, i - 1);
        return;
      }
    }
  }
}
