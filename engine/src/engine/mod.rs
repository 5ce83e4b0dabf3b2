// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod actions;
mod constants;
mod factory;
mod pieces;
mod queue;
mod stack;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use actions::{
    bulk_swap, play, reserve, swap_front_top, use_reserved, ActionError, ActionOutcome,
};
pub use constants::{QUEUE_CAP, RESERVE_CAP};
pub use factory::{DrawRule, PieceFactory};
pub use pieces::{Kind, Piece};
pub use queue::PieceQueue;
pub use stack::ReserveStack;
