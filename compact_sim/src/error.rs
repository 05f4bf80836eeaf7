//! Error types for compact_sim
//! compact_sim 错误类型定义

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  #[error("levels must be >= 2, got {0}")]
  Levels(usize),

  #[error("target must be > 0")]
  Target,

  #[error("unit must be > 0")]
  Unit,

  #[error("update fraction must be in [0, 1), got {0}")]
  Update(f64),

  #[error("space amplification percent must be in 1..=100, got {0}")]
  SpaceAmp(u16),

  #[error("stopping on size requires update fraction 0, got {0}")]
  UntilSize(f64),

  #[error("unknown strategy: {0}")]
  Strategy(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
