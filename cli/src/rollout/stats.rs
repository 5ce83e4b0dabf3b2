// cli/src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use pieceflow_engine::DrawRule;

use super::strategy::ActionKind;

/// Running aggregates for an unattended run. Indexing is by
/// `ActionKind::index()`.
#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub steps_done: u64,

    completed: [u64; ActionKind::COUNT],
    rejected: [u64; ActionKind::COUNT],

    t0: Instant,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            steps_done: 0,
            completed: [0; ActionKind::COUNT],
            rejected: [0; ActionKind::COUNT],
            t0: Instant::now(),
        }
    }

    /// Call once per attempted action; a rejected attempt is a precondition
    /// failure reported by the engine (the containers were left alone).
    pub fn on_step(&mut self, action: ActionKind, was_rejected: bool) {
        self.steps_done += 1;
        if was_rejected {
            self.rejected[action.index()] += 1;
        } else {
            self.completed[action.index()] += 1;
        }
    }

    pub fn completed(&self, action: ActionKind) -> u64 {
        self.completed[action.index()]
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected.iter().sum()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn steps_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.steps_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn live_msg(&self, rule: DrawRule) -> String {
        format!(
            "rule={:?} sps={:.1} played={} reserved={} used={} swapped={} bulk={} rejected={}",
            rule,
            self.steps_per_sec(),
            self.completed(ActionKind::Play),
            self.completed(ActionKind::Reserve),
            self.completed(ActionKind::UseReserved),
            self.completed(ActionKind::SwapFrontTop),
            self.completed(ActionKind::BulkSwap),
            self.rejected_total(),
        )
    }

    pub fn final_report(
        &self,
        strategy_name: &str,
        rule: DrawRule,
        pieces_created: u64,
        queue_len: usize,
        stack_len: usize,
    ) -> FinalReport {
        FinalReport {
            strategy: strategy_name.to_string(),
            rule,

            steps_done: self.steps_done,
            elapsed_s: self.elapsed_secs(),
            steps_per_s: self.steps_per_sec(),

            played: self.completed(ActionKind::Play),
            reserved: self.completed(ActionKind::Reserve),
            used: self.completed(ActionKind::UseReserved),
            swapped: self.completed(ActionKind::SwapFrontTop),
            bulk_swapped: self.completed(ActionKind::BulkSwap),
            rejected: self.rejected_total(),

            pieces_created,
            queue_len,
            stack_len,
        }
    }
}

/// Stable end-of-run summary struct.
#[derive(Clone, Debug)]
pub struct FinalReport {
    pub strategy: String,
    pub rule: DrawRule,

    pub steps_done: u64,
    pub elapsed_s: f64,
    pub steps_per_s: f64,

    pub played: u64,
    pub reserved: u64,
    pub used: u64,
    pub swapped: u64,
    pub bulk_swapped: u64,
    pub rejected: u64,

    pub pieces_created: u64,
    pub queue_len: usize,
    pub stack_len: usize,
}
