// cli/src/rollout/runner.rs
#![forbid(unsafe_code)]

use indicatif::{ProgressBar, ProgressStyle};

use pieceflow_engine::{
    bulk_swap, play, reserve, swap_front_top, use_reserved, DrawRule, PieceFactory, PieceQueue,
    ReserveStack, QUEUE_CAP,
};

use super::sinks::{ReportRow, RolloutSink};
use super::stats::{FinalReport, RolloutStats};
use super::strategy::{ActionKind, Strategy};

/// Fixed internal cadence for progress-bar live message updates.
/// (No CLI knob on purpose.)
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core run ----------------
    /// Total actions to attempt.
    pub steps: u64,
    /// Factory seed; the strategy derives its own stream from it.
    pub seed: u64,
    pub rule: DrawRule,

    /// Used only for the final report string.
    pub strategy_name: String,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N steps (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, strategy: &mut dyn Strategy) -> FinalReport {
        let cfg = self.cfg.clone();

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.steps);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        // Same startup as the interactive session: full queue, empty stack.
        let mut factory = PieceFactory::new(cfg.seed, cfg.rule);
        let mut queue = PieceQueue::new();
        for _ in 0..QUEUE_CAP {
            let _ = queue.enqueue(factory.create());
        }
        let mut stack = ReserveStack::new();

        let mut stats = RolloutStats::new();

        while stats.steps_done < cfg.steps {
            let action = strategy.choose_action();
            let result = match action {
                ActionKind::Play => play(&mut queue, &mut factory),
                ActionKind::Reserve => reserve(&mut queue, &mut stack, &mut factory),
                ActionKind::UseReserved => use_reserved(&mut stack),
                ActionKind::SwapFrontTop => swap_front_top(&mut queue, &mut stack),
                ActionKind::BulkSwap => bulk_swap(&mut queue, &mut stack),
            };
            stats.on_step(action, result.is_err());

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // ------------------------------------------------------------
            // Periodic table report (verbosity == 2 only).
            // ------------------------------------------------------------
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.steps_done % cfg.report_every == 0)
            {
                let row = ReportRow {
                    step: stats.steps_done,
                    steps_total: cfg.steps,
                    sps: stats.steps_per_sec(),

                    played: stats.completed(ActionKind::Play),
                    reserved: stats.completed(ActionKind::Reserve),
                    used: stats.completed(ActionKind::UseReserved),
                    swapped: stats.completed(ActionKind::SwapFrontTop),
                    bulk_swapped: stats.completed(ActionKind::BulkSwap),
                    rejected: stats.rejected_total(),

                    pieces_created: factory.pieces_created(),
                    queue_len: queue.len(),
                    stack_len: stack.len(),
                };

                self.sink.on_report_row(&row, pb.as_ref());
            }

            // ------------------------------------------------------------
            // Live progress message cadence (fixed internal cadence).
            // ------------------------------------------------------------
            if cfg.verbosity >= 1 && (stats.steps_done % LIVE_EVERY == 0) {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg(cfg.rule));
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        stats.final_report(
            &cfg.strategy_name,
            cfg.rule,
            factory.pieces_created(),
            queue.len(),
            stack.len(),
        )
    }
}
