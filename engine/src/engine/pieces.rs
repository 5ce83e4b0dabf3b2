// engine/src/engine/pieces.rs
#![forbid(unsafe_code)]

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl Kind {
    pub fn all() -> &'static [Kind] {
        use Kind::*;
        &[I, O, T, L, J, S, Z]
    }

    pub fn glyph(self) -> char {
        use Kind::*;
        match self {
            I => 'I',
            O => 'O',
            T => 'T',
            L => 'L',
            J => 'J',
            S => 'S',
            Z => 'Z',
        }
    }
}

/// A labeled unit of the piece supply.
///
/// Immutable once created; `id` is assigned by the factory and is unique
/// for the lifetime of a run. Pieces move by copy wherever they are stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Piece {
    pub kind: Kind,
    pub id: u64,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.glyph(), self.id)
    }
}
