//! Property tests for state invariants under every strategy
//! 各策略下状态不变量的属性测试

use compact_sim::{Conf, Kind, ParsedConf, Sim, State};
use proptest::prelude::*;

/// Pick any strategy
/// 任选一种策略
fn kind_strategy() -> impl Strategy<Value = Kind> {
  prop::sample::select(Kind::ALL.to_vec())
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  /// Without updates no data is lost: resident size equals flushed, and
  /// `written`/`flushed` only grow, `flushed` by one unit at a time.
  /// 无更新时数据不丢失：常驻大小等于刷盘量；`written`/`flushed` 只增不减，
  /// `flushed` 每次增加一个单位。
  #[test]
  fn prop_conservation(
    kind in kind_strategy(),
    levels in 2usize..12,
    target_units in 1u64..200,
    unit in 1u64..100,
  ) {
    let target = target_units * unit;
    let conf = ParsedConf::new(&[
      Conf::Levels(levels),
      Conf::Target(target),
      Conf::Unit(unit),
    ]).unwrap();
    let mut strategy = kind.build(&conf);
    let mut s = State::new(levels, unit, 0.0);
    let mut prev = s.clone();
    let mut err = None;

    Sim::new(target).run_with(&mut s, &mut *strategy, |step, s| {
      if err.is_some() {
        return;
      }
      let delta = s.flushed() - prev.flushed();
      if delta != 0 && delta != unit {
        err = Some(format!("step {step}: flushed grew by {delta}"));
      } else if s.total_size() != s.flushed() {
        err = Some(format!("step {step}: size {} != flushed {}", s.total_size(), s.flushed()));
      } else if s.levels().iter().sum::<u64>() != s.total_size() {
        err = Some(format!("step {step}: level sum mismatch"));
      } else if s.written().iter().zip(prev.written()).any(|(a, b)| a < b) {
        err = Some(format!("step {step}: written decreased"));
      }
      prev = s.clone();
    });

    prop_assert!(err.is_none(), "{kind}: {}", err.unwrap_or_default());
    prop_assert!(s.flushed() >= target);
    prop_assert!(s.flushed() < target + unit);
  }

  /// With updates the resident size never exceeds what was flushed
  /// 有更新时常驻大小不超过刷盘量
  #[test]
  fn prop_update_shrinks(
    kind in kind_strategy(),
    levels in 2usize..10,
    update in 0.0f64..0.9,
  ) {
    let unit = 100;
    let target = 100 * unit;
    let conf = ParsedConf::new(&[
      Conf::Levels(levels),
      Conf::Target(target),
      Conf::Update(update),
    ]).unwrap();
    let mut strategy = kind.build(&conf);
    let mut s = State::new(levels, unit, update);
    Sim::new(target).run(&mut s, &mut *strategy);
    prop_assert!(s.total_size() <= s.flushed());
    prop_assert!(s.total_size() > 0);
    prop_assert!((0.0..1.0).contains(&s.space_amp()));
  }
}
