use aok::{OK, Void};
use clap::Parser;
use compact_sim::{Kind, LEVELS, Sim, State, sweep};
use compact_sim_cli::{Cli, Common, Dump, Error, RunArgs, Table};
use log::info;

fn compare(common: &Common) -> Void {
  let conf = common.to_conf()?;
  info!(
    "compare {} strategies, target={} unit={}",
    Kind::ALL.len(),
    conf.target,
    conf.unit
  );
  let rows = sweep(&Kind::ALL, &LEVELS, &conf)?;
  print!(
    "{}",
    Table {
      kinds: &Kind::ALL,
      rows: &rows,
    }
  );
  OK
}

fn run(kind: Kind, args: &RunArgs) -> Void {
  let conf = args.to_conf()?;
  let mut s = State::new(conf.levels, conf.unit, conf.update);
  let mut strategy = kind.build(&conf);
  let sim = Sim::new(conf.target).until(conf.until);
  if args.verbose {
    sim.run_with(&mut s, &mut *strategy, |_, s| print!("{}", Dump(s)));
  } else {
    sim.run(&mut s, &mut *strategy);
  }
  print!("{}", Dump(&s));
  OK
}

fn main() -> Void {
  log_init::init();
  let cli = Cli::parse();
  match cli.strategy() {
    Ok(None) => compare(&cli.common),
    Ok(Some((kind, args))) => run(kind, &args),
    // Help, version and usage errors print and exit like the root parser
    // 帮助、版本与用法错误与根解析器一样输出并退出
    Err(Error::Clap(e)) => e.exit(),
    Err(e) => Err(e.into()),
  }
}
