#![cfg_attr(docsrs, feature(doc_cfg))]

//! compact_sim - LSM compaction cost simulator
//! LSM 压缩成本模拟器
//!
//! Models per-level sizes in abstract units and compares the write
//! amplification of compaction strategies without a storage engine.
//! 以抽象单位建模每层大小，无需存储引擎即可对比各压缩策略的写放大。

pub mod capacity;
pub mod conf;
mod error;
mod kind;
mod sim;
mod state;
pub mod strategy;
mod sweep;

pub use conf::{Conf, ParsedConf, Until};
pub use error::{Error, Result};
pub use kind::Kind;
pub use sim::{Sim, run};
pub use state::State;
pub use strategy::Strategy;
pub use sweep::{LEVELS, Row, sweep};
