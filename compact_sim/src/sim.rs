//! Simulation driver
//! 模拟驱动

use log::{debug, trace};

use crate::{Kind, ParsedConf, State, Until, strategy::Strategy};

/// Runs a strategy until the target is reached
/// 运行策略直到达到目标
#[derive(Debug, Clone, Copy)]
pub struct Sim {
  target: u64,
  until: Until,
}

impl Sim {
  /// Stop once `flushed >= target`
  /// 当 `flushed >= target` 时停止
  pub fn new(target: u64) -> Self {
    Self {
      target,
      until: Until::Flushed,
    }
  }

  pub fn until(mut self, until: Until) -> Self {
    self.until = until;
    self
  }

  #[inline]
  pub fn done(&self, s: &State) -> bool {
    let v = match self.until {
      Until::Flushed => s.flushed(),
      Until::Size => s.total_size(),
    };
    v >= self.target
  }

  /// Returns the number of steps taken
  /// 返回执行的步数
  pub fn run(&self, s: &mut State, strategy: &mut dyn Strategy) -> u64 {
    self.run_with(s, strategy, |_, _| {})
  }

  /// Run and call `on_step(step, state)` after every step
  /// 运行并在每一步后调用 `on_step(step, state)`
  pub fn run_with(
    &self,
    s: &mut State,
    strategy: &mut dyn Strategy,
    mut on_step: impl FnMut(u64, &State),
  ) -> u64 {
    let mut step = 0;
    while !self.done(s) {
      strategy.step(s);
      step += 1;
      trace!("step {step}: levels={:?}", s.levels());
      on_step(step, s);
    }
    step
  }

  /// Snapshot of the state after every step
  /// 每一步之后的状态快照
  pub fn record(&self, s: &mut State, strategy: &mut dyn Strategy) -> Vec<State> {
    let mut li = Vec::new();
    self.run_with(s, strategy, |_, s| li.push(s.clone()));
    li
  }
}

/// Run `kind` on a fresh state built from `conf`
/// 基于 `conf` 的新状态运行 `kind`
pub fn run(kind: Kind, conf: &ParsedConf) -> State {
  let mut s = State::new(conf.levels, conf.unit, conf.update);
  let mut strategy = kind.build(conf);
  debug!(
    "{kind}: levels={} target={} unit={} update={}",
    conf.levels, conf.target, conf.unit, conf.update
  );
  let steps = Sim::new(conf.target)
    .until(conf.until)
    .run(&mut s, &mut *strategy);
  debug!(
    "{kind}: {steps} steps, w-amp={:.1} s-amp={:.3}",
    s.write_amp(),
    s.space_amp()
  );
  s
}
