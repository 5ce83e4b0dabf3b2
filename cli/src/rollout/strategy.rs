// cli/src/rollout/strategy.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

/// One entry of the action menu, as chosen by an unattended run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionKind {
    Play,
    Reserve,
    UseReserved,
    SwapFrontTop,
    BulkSwap,
}

impl ActionKind {
    pub const COUNT: usize = 5;

    pub fn all() -> &'static [ActionKind] {
        use ActionKind::*;
        &[Play, Reserve, UseReserved, SwapFrontTop, BulkSwap]
    }

    pub fn index(self) -> usize {
        use ActionKind::*;
        match self {
            Play => 0,
            Reserve => 1,
            UseReserved => 2,
            SwapFrontTop => 3,
            BulkSwap => 4,
        }
    }

    pub fn name(self) -> &'static str {
        use ActionKind::*;
        match self {
            Play => "play",
            Reserve => "reserve",
            UseReserved => "use_reserved",
            SwapFrontTop => "swap_front_top",
            BulkSwap => "bulk_swap",
        }
    }
}

/// Chooses the next action (boxed so the CLI can switch implementations at
/// runtime).
pub trait Strategy {
    fn choose_action(&mut self) -> ActionKind;
}

pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_action(&mut self) -> ActionKind {
        *ActionKind::all().choose(&mut self.rng).unwrap()
    }
}

/// Deterministic sweep over the menu in order, wrapping around.
#[derive(Default)]
pub struct CycleStrategy {
    idx: usize,
}

impl CycleStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for CycleStrategy {
    fn choose_action(&mut self) -> ActionKind {
        let action = ActionKind::all()[self.idx];
        self.idx = (self.idx + 1) % ActionKind::COUNT;
        action
    }
}
