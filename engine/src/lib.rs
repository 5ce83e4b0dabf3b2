// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;

// Re-export the bits the CLI needs:
pub use engine::{
    bulk_swap, play, reserve, swap_front_top, use_reserved, ActionError, ActionOutcome, DrawRule,
    Kind, Piece, PieceFactory, PieceQueue, ReserveStack, QUEUE_CAP, RESERVE_CAP,
};
