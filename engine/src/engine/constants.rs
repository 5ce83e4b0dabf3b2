// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

/// Number of slots in the supply queue. The queue is kept topped up at this
/// occupancy by the replenishing actions.
pub const QUEUE_CAP: usize = 5;

/**
 * Number of slots in the reserve stack.
 *
 * Also the block size of `bulk_swap`: the swap moves exactly this many
 * pieces in each direction and requires the stack to be full.
 */
pub const RESERVE_CAP: usize = 3;
