// engine/src/engine/queue.rs
#![forbid(unsafe_code)]

use crate::engine::constants::QUEUE_CAP;
use crate::engine::pieces::Piece;

/// Fixed-capacity FIFO ring over `QUEUE_CAP` slots.
///
/// `head` indexes the front element and slots are addressed mod capacity;
/// when `len == 0` the value of `head` is irrelevant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAP],
    head: usize,
    len: usize,
}

impl PieceQueue {
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAP],
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAP
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAP
    }

    /// Appends at the back. A full queue hands the rejected piece back in
    /// `Err` instead of dropping it.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        let tail = (self.head + self.len) % QUEUE_CAP;
        self.slots[tail] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the least-recently enqueued piece; `None` on an
    /// empty queue, which mutates nothing.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.head].take();
        self.head = (self.head + 1) % QUEUE_CAP;
        self.len -= 1;
        piece
    }

    pub fn peek_front(&self) -> Option<Piece> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.head]
        }
    }

    /// In-place access to the front slot (used by the front/top exchange).
    pub fn front_mut(&mut self) -> Option<&mut Piece> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.head].as_mut()
        }
    }

    /// Front-to-back walk of the held pieces.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % QUEUE_CAP].as_ref())
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
