//! Compaction decision algorithms
//! 压缩决策算法

mod brb;
mod leveled;
mod multi_level;
mod tiered;
mod tiered_leveled;

pub use brb::Brb;
pub use leveled::{FlushLeveled, Leveled};
pub use multi_level::{MultiLevel, balanced_size};
pub use tiered::{LazyLeveled, TierGroups, Tiered, lazy_tiers};
pub use tiered_leveled::{TieredLeveled, tiered_leveled_tiers};

use crate::State;

/// One compaction policy. Each call performs one flush-or-compact decision.
/// 一种压缩策略。每次调用执行一次刷盘或压缩决策。
pub trait Strategy {
  fn step(&mut self, s: &mut State);
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
  #[inline]
  fn step(&mut self, s: &mut State) {
    (**self).step(s)
  }
}

/// Extend the output of a compaction rooted at `i` through trailing empty
/// levels, stopping before the last level or a non-empty successor
/// 将以 `i` 为起点的压缩输出层向后延伸经过空层，止于末层或非空后继层之前
#[inline]
pub(crate) fn extend_end(s: &State, i: usize) -> usize {
  let last = s.level_len() - 1;
  let mut end = i + 1;
  while end < last && s.levels[end + 1] == 0 {
    end += 1;
  }
  end
}
