// cli/src/rollout/mod.rs
#![forbid(unsafe_code)]

pub mod runner;
pub mod sinks;
pub mod stats;
pub mod strategy;

pub use runner::{Runner, RunnerConfig};
pub use sinks::{NoopSink, RolloutSink, TableSink};
pub use strategy::{CycleStrategy, RandomStrategy, Strategy};
