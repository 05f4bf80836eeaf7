//! Simulation configuration
//! 模拟配置

use crate::{Error, Result};

/// Default configuration values
/// 默认配置值
pub mod default {
  pub const LEVELS: usize = 10;
  /// Target in flush units (16K flushes ~ 1TB in 64MB units)
  /// 目标大小，以刷盘单位计（16K 次刷盘 ~ 以 64MB 为单位写 1TB）
  pub const TARGET_UNITS: u64 = 16384;
  pub const UNIT: u64 = 100;
  pub const UPDATE: f64 = 0.0;
}

/// Stopping condition of a run
/// 运行的停止条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Until {
  /// Cumulative flushed reaches target
  /// 累计刷盘量达到目标
  #[default]
  Flushed,
  /// Resident size reaches target
  /// 常驻大小达到目标
  Size,
}

/// Simulation configuration item
/// 模拟配置项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Number of levels
  /// 层数
  Levels(usize),
  /// Target size in absolute units
  /// 目标大小（绝对单位）
  Target(u64),
  /// Size of one flush
  /// 单次刷盘大小
  Unit(u64),
  /// Fraction of rewritten input dropped as overwritten
  /// 重写时因覆盖而丢弃的输入比例
  Update(f64),
  Until(Until),
}

/// Parsed and validated configuration
/// 解析并校验后的配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedConf {
  pub levels: usize,
  pub target: u64,
  pub unit: u64,
  pub update: f64,
  pub until: Until,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      levels: default::LEVELS,
      target: default::TARGET_UNITS * default::UNIT,
      unit: default::UNIT,
      update: default::UPDATE,
      until: Until::Flushed,
    }
  }
}

impl ParsedConf {
  pub fn new(conf: &[Conf]) -> Result<Self> {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::Levels(v) => c.levels = v,
        Conf::Target(v) => c.target = v,
        Conf::Unit(v) => c.unit = v,
        Conf::Update(v) => c.update = v,
        Conf::Until(v) => c.until = v,
      }
    }
    c.check()?;
    Ok(c)
  }

  /// Same configuration with another level count
  /// 相同配置但使用另一层数
  pub fn with_levels(&self, levels: usize) -> Result<Self> {
    let c = Self { levels, ..*self };
    c.check()?;
    Ok(c)
  }

  fn check(&self) -> Result<()> {
    if self.levels < 2 {
      return Err(Error::Levels(self.levels));
    }
    if self.target == 0 {
      return Err(Error::Target);
    }
    if self.unit == 0 {
      return Err(Error::Unit);
    }
    if !(0.0..1.0).contains(&self.update) {
      return Err(Error::Update(self.update));
    }
    if self.until == Until::Size && self.update != 0.0 {
      return Err(Error::UntilSize(self.update));
    }
    Ok(())
  }
}
