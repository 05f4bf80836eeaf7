//! Compare strategies across level counts
//! 跨层数对比策略

use crate::{Kind, ParsedConf, Result, sim::run};

/// Level counts compared by default
/// 默认对比的层数
pub const LEVELS: [usize; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 50, 100];

/// Write amplification of each strategy at one level count
/// 某一层数下各策略的写放大
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
  pub levels: usize,
  pub write_amp: Vec<f64>,
}

/// One row per level count, one column per kind
/// 每个层数一行，每个策略一列
pub fn sweep(kinds: &[Kind], levels: &[usize], conf: &ParsedConf) -> Result<Vec<Row>> {
  levels
    .iter()
    .map(|&n| -> Result<Row> {
      let conf = conf.with_levels(n)?;
      Ok(Row {
        levels: n,
        write_amp: kinds.iter().map(|&k| run(k, &conf).write_amp()).collect(),
      })
    })
    .collect()
}
