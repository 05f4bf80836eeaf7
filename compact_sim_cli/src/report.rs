//! Fixed-width text reports
//! 定宽文本报告

use std::fmt;

use compact_sim::{Kind, Row, State};

/// Per-level dump of one state
/// 单个状态的逐层输出
pub struct Dump<'a>(pub &'a State);

impl fmt::Display for Dump<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = self.0;
    let total = s.total_size();
    writeln!(f, "level      size     write     space")?;
    for (i, (size, written)) in s.levels().iter().zip(s.written()).enumerate() {
      let share = if total == 0 {
        0.0
      } else {
        100.0 * *size as f64 / total as f64
      };
      writeln!(f, "{i:5} {size:9} {written:9} {share:8.1}%")?;
    }
    writeln!(f, "total {total:9} {:9}", s.total_written())?;
    writeln!(f, "w-amp {:9.1}", s.write_amp())?;
    writeln!(f, "s-amp {:8.1}%", 100.0 * s.space_amp())?;
    writeln!(f)
  }
}

/// Write amplification table, one column per strategy
/// 写放大对比表，每个策略一列
pub struct Table<'a> {
  pub kinds: &'a [Kind],
  pub rows: &'a [Row],
}

impl fmt::Display for Table<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "levels")?;
    for kind in self.kinds {
      write!(f, "{:>16}", kind.to_string())?;
    }
    writeln!(f)?;
    for row in self.rows {
      write!(f, "{:6}", row.levels)?;
      for w in &row.write_amp {
        write!(f, "{w:16.1}")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}
