//! Tiered and lazy-leveled compaction
//! 分层级（tiered）与惰性分层压缩

use super::Strategy;
use crate::State;

/// Max tiers per tier-level
/// 每个层组的最大 tier 数
pub const TIERS: usize = 4;

/// Widths of consecutive tier groups. Group 0 takes the remainder in
/// [1, tiers], every later group has exactly `tiers` members.
/// 连续层组的宽度。第 0 组取余数，范围 [1, tiers]，其余每组恰好 `tiers` 个。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierGroups(Vec<usize>);

impl TierGroups {
  /// Split `levels` levels into groups of `tiers`
  /// 将 `levels` 个层按 `tiers` 分组
  pub fn new(levels: usize, tiers: usize) -> Self {
    let n = levels.div_ceil(tiers);
    let mut li = vec![tiers; n];
    li[0] = levels - tiers * (n - 1);
    Self(li)
  }

  #[inline]
  pub fn widths(&self) -> &[usize] {
    &self.0
  }

  #[inline]
  pub fn last(&self) -> usize {
    self.0[self.0.len() - 1]
  }

  /// Flush into the deepest empty tier of group 0, else cascade full groups
  /// into the deepest empty tier of the next group. Returns false only when
  /// no group had an empty tier and the caller must compact the bottom.
  /// 刷盘到第 0 组最深的空 tier；否则将满组级联到下一组最深的空 tier。
  /// 仅当所有组都没有空 tier 时返回 false，由调用方压缩底部。
  fn step(&self, s: &mut State) -> bool {
    for i in (0..self.0[0]).rev() {
      if s.levels[i] == 0 {
        s.flush(i);
        return true;
      }
    }

    let mut found = false;
    let mut start = 0;
    for j in 1..self.0.len() {
      let base = start + self.0[j - 1];
      for i in (0..self.0[j]).rev() {
        if s.levels[base + i] == 0 {
          s.compact(start, base + i);
          if i != 0 {
            return true;
          }
          // Group j is now full, keep cascading into j+1.
          // 第 j 组已满，继续级联到 j+1。
          found = true;
          break;
        }
      }
      start = base;
    }
    found
  }
}

/// All tier groups fan in "all to all": when every tier of a group is
/// non-empty, the group is compacted into the deepest empty tier of the next.
/// 层组之间全对全扇入：某组所有 tier 非空时，整组压缩到下一组最深的空 tier。
#[derive(Debug, Clone)]
pub struct Tiered {
  levels: usize,
  tiers: usize,
  groups: TierGroups,
}

impl Tiered {
  /// Panics if `levels < 2`
  /// `levels < 2` 时 panic
  pub fn new(levels: usize) -> Self {
    assert!(levels >= 2, "tiered needs at least 2 levels, got {levels}");
    let tiers = TIERS.min(levels - 1);
    Self {
      levels,
      tiers,
      groups: TierGroups::new(levels, tiers),
    }
  }

  #[inline]
  pub fn groups(&self) -> &TierGroups {
    &self.groups
  }
}

impl Strategy for Tiered {
  fn step(&mut self, s: &mut State) {
    if self.groups.step(s) {
      return;
    }
    // Bottom group is full, compact it to make room.
    // 底部组已满，压缩以腾出空间。
    s.compact(self.levels - self.tiers - 1, self.levels - 1);
  }
}

/// Tiered upper levels above a single-run bottom level (Dostoevsky)
/// 上层为多 tier、底层为单一 run 的惰性分层压缩（Dostoevsky）
#[derive(Debug, Clone)]
pub struct LazyLeveled {
  levels: usize,
  groups: TierGroups,
}

impl LazyLeveled {
  /// Panics if `levels < 2`
  /// `levels < 2` 时 panic
  pub fn new(levels: usize) -> Self {
    assert!(levels >= 2, "lazy-leveled needs at least 2 levels, got {levels}");
    Self {
      levels,
      groups: TierGroups::new(levels - 1, lazy_tiers(levels)),
    }
  }

  #[inline]
  pub fn groups(&self) -> &TierGroups {
    &self.groups
  }
}

/// Tiers per group for a level count
/// 按层数选择每组 tier 数
pub fn lazy_tiers(levels: usize) -> usize {
  match levels {
    2 => 1,
    3..=5 => 2,
    6..=11 => 3,
    _ => TIERS,
  }
}

impl Strategy for LazyLeveled {
  fn step(&mut self, s: &mut State) {
    if self.groups.step(s) {
      return;
    }
    // Merge the last tier group into the bottom level.
    // 将最后一个层组合并到底层。
    s.compact(self.levels - self.groups.last() - 1, self.levels - 1);
  }
}
