// cli/src/main.rs
#![forbid(unsafe_code)]

mod rollout;
mod session;

use clap::Parser;

use crate::rollout::{
    CycleStrategy, NoopSink, RandomStrategy, RolloutSink, Runner, RunnerConfig, Strategy,
    TableSink,
};
use pieceflow_engine::DrawRule;

#[derive(Parser, Debug)]
#[command(name = "pieceflow_cli")]
struct Args {
    /// Factory RNG seed. If omitted, a fixed default keeps runs reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Piece draw rule: uniform | bag7
    #[arg(long, default_value = "uniform")]
    draw_rule: String,

    // ---------------- rollout mode ----------------
    /// Attempt this many actions non-interactively instead of running the
    /// menu session (0 = interactive).
    #[arg(long, default_value_t = 0)]
    steps: u64,

    /// Rollout strategy: random | cycle
    #[arg(long, default_value = "random")]
    strategy: String,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N steps (only used with --verbosity 2).
    #[arg(long, default_value_t = 200)]
    report_every: u64,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or(12345);
    let rule = DrawRule::from_cli(&args.draw_rule);

    if args.steps == 0 {
        session::run(seed, rule);
        return;
    }

    // Strategy instance (boxed so the CLI can switch implementations at runtime).
    let mut strategy: Box<dyn Strategy> = match args.strategy.as_str() {
        "cycle" => Box::new(CycleStrategy::new()),
        _ => Box::new(RandomStrategy::new(seed.wrapping_add(999))),
    };

    // Run configuration (data only; no logic).
    let cfg = RunnerConfig {
        steps: args.steps,
        seed,
        rule,

        strategy_name: args.strategy.clone(),

        verbosity: args.verbosity,
        report_every: args.report_every,
    };

    // Reporting sink:
    // - verbosity 2 => periodic table (unless report_every == 0)
    // - otherwise   => no-op
    let sink: Box<dyn RolloutSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        // Header cadence is a formatting detail; cadence in *steps* is handled by Runner.
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run(&mut *strategy);

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: strategy={} draw_rule={:?} steps_done={} elapsed={:.3}s steps/s={:.1} played={} reserved={} used={} swapped={} bulk_swapped={} rejected={} pieces_created={} queue={} stack={}",
        report.strategy,
        report.rule,
        report.steps_done,
        report.elapsed_s,
        report.steps_per_s,
        report.played,
        report.reserved,
        report.used,
        report.swapped,
        report.bulk_swapped,
        report.rejected,
        report.pieces_created,
        report.queue_len,
        report.stack_len,
    );
}
