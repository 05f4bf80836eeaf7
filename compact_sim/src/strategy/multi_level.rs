//! Multi-level compaction
//! 多层压缩
//!
//! If a compaction Ln->Ln+1 makes Ln+1 need a compaction, a single Ln->Ln+2
//! compaction would have been cheaper. The same holds for a flush that
//! triggers an L0 compaction, so the flush is merged into it.
//!
//! A level is "too large" when it outgrows the size that equalizes the write
//! amplification of adjacent levels. Sizes are measured in flush units:
//!
//! ```text
//! s(x)   = size of level x
//! T(y)   = s(1) + ... + s(y)
//! w(1)   = s(1) / 2
//! w(n)   = T(n) / (T(n-1) + 1)
//!
//! w(1) = w(2)   =>  s(2)   = s(1) * (s(1) + 1) / 2 - s(1)
//! w(n) = w(n+1) =>  s(n+1) = T(n) * (T(n) + 1) / (T(n) - s(n) + 1) - T(n)
//! ```
//!
//! This assumes a level grows by the full size of its input, which is
//! pessimistic with updates and deletes.
//!
//! 若 Ln->Ln+1 压缩导致 Ln+1 也需压缩，则一次 Ln->Ln+2 压缩更省。触发 L0 压缩的
//! 刷盘同理，因此刷盘并入压缩。当某层超过使相邻层写放大相等的大小时视为“过大”。

use super::Strategy;
use crate::State;

#[derive(Debug, Clone, Copy, Default)]
pub struct MultiLevel;

impl MultiLevel {
  pub fn new() -> Self {
    Self
  }
}

/// Size of level i+1 that equalizes write amplification with level i, in
/// flush units. `sum` is T(i), `last` is s(i).
/// 使第 i+1 层与第 i 层写放大相等的大小（刷盘单位）。`sum` 为 T(i)，`last` 为 s(i)。
#[inline]
pub fn balanced_size(first: bool, sum: u64, last: u64) -> u64 {
  let sum = sum as u128;
  let size = if first {
    sum * (sum + 1) / 2 - sum
  } else {
    sum * (sum + 1) / (sum - last as u128 + 1) - sum
  };
  size.min(u64::MAX as u128) as u64
}

impl Strategy for MultiLevel {
  fn step(&mut self, s: &mut State) {
    s.ingest(0);
    let unit = s.unit();
    let n = s.level_len();
    let mut sum = 0;
    for i in 1..n {
      let last = s.levels[i - 1];
      sum += last;
      let size = balanced_size(i == 1, sum / unit, last / unit);
      if size.saturating_mul(unit) < s.levels[i] {
        s.compact(0, i - 1);
        return;
      }
    }
    s.compact(0, n - 1);
  }
}
