//! compact_sim_cli - command line and text reports
//! 命令行与文本报告

pub mod cli;
pub mod error;
pub mod report;

pub use cli::{Cli, Cmd, Common, RunArgs, UntilArg};
pub use error::{Error, Result};
pub use report::{Dump, Table};
