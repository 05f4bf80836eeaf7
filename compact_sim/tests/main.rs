use aok::{OK, Void};
use compact_sim::{
  Conf, Error, Kind, ParsedConf, State, Until,
  capacity::{growth, max_level_size},
};
use log::info;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_flush_charges_whole_level() {
  let mut s = State::new(3, 100, 0.0);
  s.flush(0);
  assert_eq!(s.levels(), &[100, 0, 0]);
  assert_eq!(s.written(), &[100, 0, 0]);
  assert_eq!(s.flushed(), 100);

  // Second flush merges with the resident unit
  // 第二次刷盘与已有数据合并
  s.flush(0);
  assert_eq!(s.levels(), &[200, 0, 0]);
  assert_eq!(s.written(), &[300, 0, 0]);
  assert_eq!(s.flushed(), 200);
}

#[test]
fn test_move_compaction() {
  let mut s = State::new(4, 100, 0.5);
  s.flush(1);
  let written = s.written().to_vec();

  // One non-empty input, empty output: moved as is, update fraction ignored
  // 单一非空输入、空输出：原样移动，忽略更新比例
  let size = s.compact(0, 3);
  assert_eq!(size, 100);
  assert_eq!(s.levels(), &[0, 0, 0, 100]);
  assert_eq!(s.written(), written.as_slice());
}

#[test]
fn test_rewrite_compaction() {
  let mut s = State::new(3, 100, 0.0);
  s.flush(0);
  s.flush(1);
  let size = s.compact(0, 2);
  assert_eq!(size, 200);
  assert_eq!(s.levels(), &[0, 0, 200]);
  assert_eq!(s.written(), &[100, 100, 200]);

  // Output level not empty: rewrite even with a single input
  // 输出层非空：即使单一输入也需重写
  s.flush(1);
  let size = s.compact(1, 2);
  assert_eq!(size, 300);
  assert_eq!(s.written()[2], 500);
  assert_eq!(s.flushed(), 300);
}

#[test]
fn test_update_fraction() {
  let mut s = State::new(2, 100, 0.25);
  s.flush(0);
  s.compact(0, 1);
  s.flush(0);
  // L1 = 100 + 100 * 0.75
  let size = s.compact(0, 1);
  assert_eq!(size, 175);
  assert_eq!(s.total_size(), 175);
  assert_eq!(s.written(), &[200, 175]);
}

#[test]
fn test_amp() {
  let s = State::new(3, 100, 0.0);
  assert_eq!(s.write_amp(), 0.0);
  assert_eq!(s.space_amp(), 0.0);

  let mut s = State::new(3, 100, 0.0);
  s.flush(0);
  s.compact(0, 2);
  s.flush(0);
  assert_eq!(s.total_size(), 200);
  assert_eq!(s.total_written(), 200);
  assert_eq!(s.write_amp(), 1.0);
  assert_eq!(s.space_amp(), 0.5);
}

#[test]
fn test_max_level_size() {
  // 1 + m + m^2 >= 1600 first holds at m = 39.5
  let m = growth(2, 1600);
  assert!((m - 39.5).abs() < 1e-6, "m = {m}");
  assert_eq!(max_level_size(2, 1600), vec![1, 39]);

  // 1 + m + m^2 + m^3 >= 1600 first holds at m = 11.4
  assert_eq!(max_level_size(3, 1600), vec![1, 11, 129]);

  // Tiny target: the first candidate already fits
  // 极小目标：首个候选值即满足
  assert_eq!(max_level_size(4, 1), vec![1, 1, 1, 1]);

  let li = max_level_size(10, 1_638_400);
  assert_eq!(li.len(), 10);
  assert!(li.windows(2).all(|w| w[0] <= w[1]));
  info!("max level size: {li:?}");
}

#[test]
fn test_conf() -> Void {
  let conf = ParsedConf::new(&[])?;
  assert_eq!(conf, ParsedConf::default());
  assert_eq!(conf.levels, 10);
  assert_eq!(conf.target, 1_638_400);

  let conf = ParsedConf::new(&[Conf::Levels(4), Conf::Target(6400), Conf::Update(0.1)])?;
  assert_eq!(conf.levels, 4);
  assert_eq!(conf.target, 6400);
  assert_eq!(conf.unit, 100);

  assert_eq!(ParsedConf::new(&[Conf::Levels(1)]), Err(Error::Levels(1)));
  assert_eq!(ParsedConf::new(&[Conf::Target(0)]), Err(Error::Target));
  assert_eq!(ParsedConf::new(&[Conf::Unit(0)]), Err(Error::Unit));
  assert_eq!(ParsedConf::new(&[Conf::Update(1.0)]), Err(Error::Update(1.0)));
  assert!(ParsedConf::new(&[Conf::Update(-0.1)]).is_err());
  assert_eq!(
    ParsedConf::new(&[Conf::Until(Until::Size), Conf::Update(0.5)]),
    Err(Error::UntilSize(0.5))
  );
  assert_eq!(conf.with_levels(0), Err(Error::Levels(0)));
  OK
}

#[test]
fn test_kind_names() -> Void {
  for kind in Kind::ALL {
    assert_eq!(kind.to_string().parse::<Kind>()?, kind);
  }
  assert_eq!("brb".parse::<Kind>()?, Kind::Brb(None));
  assert_eq!("brb-40".parse::<Kind>()?, Kind::Brb(Some(40)));
  assert_eq!(Kind::Brb(Some(25)).to_string(), "brb-25");
  assert_eq!("brb-0".parse::<Kind>(), Err(Error::SpaceAmp(0)));
  assert_eq!("brb-101".parse::<Kind>(), Err(Error::SpaceAmp(101)));
  assert_eq!(
    "brb-x".parse::<Kind>(),
    Err(Error::Strategy("brb-x".into()))
  );
  assert_eq!(
    "universal".parse::<Kind>(),
    Err(Error::Strategy("universal".into()))
  );
  OK
}
