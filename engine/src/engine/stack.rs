// engine/src/engine/stack.rs
#![forbid(unsafe_code)]

use crate::engine::constants::RESERVE_CAP;
use crate::engine::pieces::Piece;

/// Fixed-capacity LIFO over `RESERVE_CAP` slots.
///
/// `len` doubles as the insertion point; the top element lives at
/// `slots[len - 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Option<Piece>; RESERVE_CAP],
    len: usize,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            slots: [None; RESERVE_CAP],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        RESERVE_CAP
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == RESERVE_CAP
    }

    /// A full stack hands the rejected piece back in `Err` instead of
    /// dropping it.
    pub fn push(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the most-recently pushed piece; `None` on an
    /// empty stack, which mutates nothing.
    pub fn pop(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    pub fn peek_top(&self) -> Option<Piece> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.len - 1]
        }
    }

    /// In-place access to the top slot (used by the front/top exchange).
    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.len - 1].as_mut()
        }
    }

    /// Top-to-base walk of the held pieces.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).rev().filter_map(move |i| self.slots[i].as_ref())
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}
