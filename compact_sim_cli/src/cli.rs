//! Command line arguments
//! 命令行参数

use std::ffi::OsString;

use clap::{Args, Parser, Subcommand, ValueEnum};
use compact_sim::{Conf, Kind, ParsedConf, Until, conf::default};

use crate::{Error, Result};

const STRATEGIES: &str = "Strategies / 策略:
  leveled, tiered, tiered+leveled, lazy+leveled, flush+leveled, multi-level,
  brb, brb-<space amp percent>

Without a strategy, every one is compared across 2..=10, 20, 50, 100 levels.
不指定策略时，在 2..=10、20、50、100 层上对比所有策略。";

#[derive(Parser, Debug)]
#[command(name = "compactsim", version, about = "compaction simulation toy", after_help = STRATEGIES)]
pub struct Cli {
  #[command(subcommand)]
  pub cmd: Option<Cmd>,

  #[command(flatten)]
  pub common: Common,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Cmd {
  /// `<strategy> [flags]`, flags parsed by [`RunArgs`]
  /// `<策略> [参数]`，参数由 [`RunArgs`] 解析
  #[command(external_subcommand)]
  Run(Vec<OsString>),
}

/// Flags shared by the comparison and single runs
/// 对比与单次运行共用的参数
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Common {
  /// target size, in units
  #[arg(short, long, default_value_t = default::TARGET_UNITS)]
  pub target: u64,

  /// unit size
  #[arg(long, default_value_t = default::UNIT)]
  pub unit: u64,

  /// update fraction
  #[arg(long, default_value_t = default::UPDATE)]
  pub update: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UntilArg {
  #[default]
  Flushed,
  Size,
}

impl From<UntilArg> for Until {
  fn from(v: UntilArg) -> Self {
    match v {
      UntilArg::Flushed => Until::Flushed,
      UntilArg::Size => Until::Size,
    }
  }
}

/// Flags of a single strategy run; argv[0] is the strategy name
/// 单个策略运行的参数；argv[0] 为策略名
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
  /// number of levels
  #[arg(short, long, default_value_t = default::LEVELS)]
  pub levels: usize,

  #[command(flatten)]
  pub common: Common,

  /// stop when flushed or resident size reaches the target
  #[arg(long, value_enum, default_value_t)]
  pub until: UntilArg,

  /// dump the level state after every step
  #[arg(short, long)]
  pub verbose: bool,
}

impl Default for Common {
  fn default() -> Self {
    Self {
      target: default::TARGET_UNITS,
      unit: default::UNIT,
      update: default::UPDATE,
    }
  }
}

impl Cli {
  /// Strategy run of the subcommand, `None` means compare all
  /// 子命令对应的策略运行，`None` 表示全部对比
  ///
  /// Root flags only feed the comparison; a strategy run takes its own after the name.
  /// 根参数只用于对比；策略运行的参数写在策略名之后。
  pub fn strategy(&self) -> Result<Option<(Kind, RunArgs)>> {
    let Some(Cmd::Run(args)) = &self.cmd else {
      return Ok(None);
    };
    if self.common != Common::default() {
      return Err(Error::RootFlag);
    }
    RunArgs::from_cmd(args).map(Some)
  }
}

impl Common {
  /// Configuration items, target scaled by unit
  /// 配置项，目标按单位缩放
  pub fn items(&self) -> [Conf; 3] {
    [
      Conf::Target(self.target.saturating_mul(self.unit)),
      Conf::Unit(self.unit),
      Conf::Update(self.update),
    ]
  }

  pub fn to_conf(&self) -> Result<ParsedConf> {
    Ok(ParsedConf::new(&self.items())?)
  }
}

impl RunArgs {
  /// Strategy name and flags of an external subcommand
  /// 外部子命令的策略名与参数
  pub fn from_cmd(args: &[OsString]) -> Result<(Kind, Self)> {
    let name = args.first().map(|s| s.to_string_lossy()).unwrap_or_default();
    let kind = name.parse::<Kind>()?;
    Ok((kind, Self::try_parse_from(args)?))
  }

  pub fn to_conf(&self) -> Result<ParsedConf> {
    let mut conf = self.common.items().to_vec();
    conf.push(Conf::Levels(self.levels));
    conf.push(Conf::Until(self.until.into()));
    Ok(ParsedConf::new(&conf)?)
  }
}
