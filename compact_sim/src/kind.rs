//! Strategy names and construction
//! 策略名称与构建

use std::{fmt, str::FromStr};

use crate::{
  Error, ParsedConf, Result,
  strategy::{Brb, FlushLeveled, LazyLeveled, Leveled, MultiLevel, Strategy, Tiered, TieredLeveled},
};

/// BRB name prefix, `brb-<percent>` sets the space amplification cap
/// BRB 名称前缀，`brb-<percent>` 设置空间放大上限
const BRB: &str = "brb";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
  Leveled,
  Tiered,
  TieredLeveled,
  LazyLeveled,
  FlushLeveled,
  MultiLevel,
  /// Optional space amplification cap in percent
  /// 可选的空间放大上限（百分比）
  Brb(Option<u16>),
}

impl Kind {
  /// Every strategy, with the BRB caps compared by default
  /// 所有策略，包含默认对比的 BRB 上限
  pub const ALL: [Kind; 10] = [
    Kind::Leveled,
    Kind::Tiered,
    Kind::TieredLeveled,
    Kind::LazyLeveled,
    Kind::FlushLeveled,
    Kind::MultiLevel,
    Kind::Brb(Some(25)),
    Kind::Brb(Some(33)),
    Kind::Brb(Some(50)),
    Kind::Brb(Some(100)),
  ];

  /// Strategy bound to `conf`
  /// 绑定 `conf` 的策略实例
  pub fn build(&self, conf: &ParsedConf) -> Box<dyn Strategy> {
    let (levels, target) = (conf.levels, conf.target);
    match *self {
      Kind::Leveled => Box::new(Leveled::new(levels, target)),
      Kind::Tiered => Box::new(Tiered::new(levels)),
      Kind::TieredLeveled => Box::new(TieredLeveled::new(levels, target)),
      Kind::LazyLeveled => Box::new(LazyLeveled::new(levels)),
      Kind::FlushLeveled => Box::new(FlushLeveled::new(levels, target)),
      Kind::MultiLevel => Box::new(MultiLevel::new()),
      Kind::Brb(pct) => Box::new(Brb::new(levels, pct.map(|p| p as f64 / 100.0))),
    }
  }
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Kind::Leveled => f.write_str("leveled"),
      Kind::Tiered => f.write_str("tiered"),
      Kind::TieredLeveled => f.write_str("tiered+leveled"),
      Kind::LazyLeveled => f.write_str("lazy+leveled"),
      Kind::FlushLeveled => f.write_str("flush+leveled"),
      Kind::MultiLevel => f.write_str("multi-level"),
      Kind::Brb(None) => f.write_str(BRB),
      Kind::Brb(Some(pct)) => write!(f, "{BRB}-{pct}"),
    }
  }
}

impl FromStr for Kind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Ok(match s {
      "leveled" => Kind::Leveled,
      "tiered" => Kind::Tiered,
      "tiered+leveled" => Kind::TieredLeveled,
      "lazy+leveled" => Kind::LazyLeveled,
      "flush+leveled" => Kind::FlushLeveled,
      "multi-level" => Kind::MultiLevel,
      BRB => Kind::Brb(None),
      _ => {
        let Some(pct) = s.strip_prefix("brb-") else {
          return Err(Error::Strategy(s.into()));
        };
        let pct: u16 = pct.parse().map_err(|_| Error::Strategy(s.into()))?;
        if !(1..=100).contains(&pct) {
          return Err(Error::SpaceAmp(pct));
        }
        Kind::Brb(Some(pct))
      }
    })
  }
}
