// engine/src/engine/actions.rs
#![forbid(unsafe_code)]

/**
 * The five strategic actions over the shared queue/stack pair.
 *
 * Contract:
 * - Containers and factory are borrowed per call; nothing is retained.
 * - No panics: every precondition failure comes back as `ActionError` and
 *   leaves both containers untouched.
 * - `play` and `reserve` replenish the queue from the factory so its
 *   occupancy never drops; the other actions create no pieces.
 */
use std::mem;

use thiserror::Error;

use crate::engine::constants::RESERVE_CAP;
use crate::engine::factory::PieceFactory;
use crate::engine::pieces::Piece;
use crate::engine::queue::PieceQueue;
use crate::engine::stack::ReserveStack;

/// Recoverable precondition failures. The `Display` text is the
/// user-facing outcome message.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ActionError {
    #[error("supply queue is empty, nothing to play")]
    QueueEmpty,

    #[error("reserve stack is empty, nothing to use")]
    StackEmpty,

    #[error("reserve stack is full ({cap}/{cap}), cannot reserve")]
    StackFull { cap: usize },

    #[error("bulk swap needs {required} queued pieces, queue holds {held}")]
    QueueShort { held: usize, required: usize },

    #[error("bulk swap needs a full reserve of {required}, stack holds {held}")]
    StackShort { held: usize, required: usize },
}

/// Structured report of a completed action; block arrays are ordered as
/// they were removed (index 0 = old queue front / old stack top).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionOutcome {
    Played {
        piece: Piece,
        replacement: Piece,
    },
    Reserved {
        piece: Piece,
        replacement: Piece,
    },
    Used {
        piece: Piece,
    },
    Swapped {
        to_queue: Piece,
        to_stack: Piece,
    },
    BulkSwapped {
        to_stack: [Piece; RESERVE_CAP],
        to_queue: [Piece; RESERVE_CAP],
    },
}

/// Dequeues the front piece and tops the queue back up from the factory.
/// Queue occupancy is unchanged; the composition rotates.
pub fn play(queue: &mut PieceQueue, factory: &mut PieceFactory) -> Result<ActionOutcome, ActionError> {
    let piece = queue.dequeue().ok_or(ActionError::QueueEmpty)?;
    let replacement = factory.create();
    // cannot fail: the dequeue above freed a slot
    let _ = queue.enqueue(replacement);
    Ok(ActionOutcome::Played { piece, replacement })
}

/// Moves the queue front onto the reserve stack and replenishes the queue.
/// Queue occupancy unchanged, stack grows by one.
pub fn reserve(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
    factory: &mut PieceFactory,
) -> Result<ActionOutcome, ActionError> {
    if queue.is_empty() {
        return Err(ActionError::QueueEmpty);
    }
    if stack.is_full() {
        return Err(ActionError::StackFull {
            cap: stack.capacity(),
        });
    }

    let piece = queue.dequeue().ok_or(ActionError::QueueEmpty)?;
    // cannot fail: fullness was checked above
    let _ = stack.push(piece);

    let replacement = factory.create();
    // cannot fail: the dequeue above freed a slot
    let _ = queue.enqueue(replacement);

    Ok(ActionOutcome::Reserved { piece, replacement })
}

/// Pops the reserve top. Reserved pieces are consumed, never recycled, so
/// there is no replenishment here.
pub fn use_reserved(stack: &mut ReserveStack) -> Result<ActionOutcome, ActionError> {
    let piece = stack.pop().ok_or(ActionError::StackEmpty)?;
    Ok(ActionOutcome::Used { piece })
}

/// Exchanges the queue front with the stack top in place.
///
/// Postcondition: the old stack top IS the new queue front (and vice
/// versa) — a remove/re-insert sequence would rotate the swapped piece to
/// the back of the queue instead. Both occupancies are unchanged and no
/// piece is created.
pub fn swap_front_top(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
) -> Result<ActionOutcome, ActionError> {
    let front = queue.front_mut().ok_or(ActionError::QueueEmpty)?;
    let top = stack.top_mut().ok_or(ActionError::StackEmpty)?;

    mem::swap(front, top);

    Ok(ActionOutcome::Swapped {
        to_queue: *front,
        to_stack: *top,
    })
}

/// Removes `RESERVE_CAP` pieces through `next`, preserving removal order.
/// Callers must have checked the source holds at least that many; the
/// array literal pins the block size at compile time.
fn take_block(mut next: impl FnMut() -> Option<Piece>) -> Option<[Piece; RESERVE_CAP]> {
    Some([next()?, next()?, next()?])
}

/// Swaps the `RESERVE_CAP` frontmost queue pieces with the full reserve,
/// translating between the two ordering disciplines.
///
/// The old queue front ends at the BASE of the stack (third-from-front on
/// top); the old stack top ends at the FRONT of the queue, with the
/// untouched queue tail rotated in behind the swapped block. 3-for-3:
/// both occupancies are unchanged and no piece is created.
pub fn bulk_swap(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
) -> Result<ActionOutcome, ActionError> {
    if queue.len() < RESERVE_CAP {
        return Err(ActionError::QueueShort {
            held: queue.len(),
            required: RESERVE_CAP,
        });
    }
    if !stack.is_full() {
        return Err(ActionError::StackShort {
            held: stack.len(),
            required: RESERVE_CAP,
        });
    }

    // FIFO order: index 0 = old queue front. The length check above makes
    // the error arm unreachable.
    let from_queue = take_block(|| queue.dequeue()).ok_or(ActionError::QueueShort {
        held: queue.len(),
        required: RESERVE_CAP,
    })?;

    // LIFO order: index 0 = old stack top.
    let from_stack = take_block(|| stack.pop()).ok_or(ActionError::StackShort {
        held: stack.len(),
        required: RESERVE_CAP,
    })?;

    // Old front goes in first and ends at the base.
    for piece in from_queue {
        let _ = stack.push(piece);
    }

    // The swapped-in block takes the queue front in old top-to-base order;
    // the remaining tail rotates through the ring behind it.
    let mut tail = Vec::with_capacity(queue.len());
    while let Some(piece) = queue.dequeue() {
        tail.push(piece);
    }
    for piece in from_stack {
        let _ = queue.enqueue(piece);
    }
    for piece in tail {
        let _ = queue.enqueue(piece);
    }

    Ok(ActionOutcome::BulkSwapped {
        to_stack: from_queue,
        to_queue: from_stack,
    })
}
