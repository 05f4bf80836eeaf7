//! Error types for compact_sim_cli
//! compact_sim_cli 错误类型定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("sim: {0}")]
  Sim(#[from] compact_sim::Error),

  #[error("args: {0}")]
  Clap(#[from] clap::Error),

  #[error("--target, --unit and --update go after the strategy name")]
  RootFlag,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
