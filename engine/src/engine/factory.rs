// engine/src/engine/factory.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::pieces::{Kind, Piece};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawRule {
    Uniform,
    Bag7,
}

impl DrawRule {
    pub fn from_cli(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bag7" | "7bag" | "bag" => DrawRule::Bag7,
            _ => DrawRule::Uniform,
        }
    }
}

/// Sole producer of `Piece` values.
///
/// Owns the RNG (draw stream responsibility) and the id counter: ids start
/// at 0, increase by one per piece, and are never reused by this factory.
#[derive(Clone)]
pub struct PieceFactory {
    rule: DrawRule,

    rng: StdRng,
    next_id: u64,

    // 7-bag state (only used if rule == Bag7)
    bag: [Kind; 7],
    bag_idx: usize,
}

impl PieceFactory {
    pub fn new(seed: u64, rule: DrawRule) -> Self {
        Self {
            rule,
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
            bag: [
                Kind::I,
                Kind::O,
                Kind::T,
                Kind::L,
                Kind::J,
                Kind::S,
                Kind::Z,
            ],
            bag_idx: 7, // force refill on first Bag7 draw
        }
    }

    pub fn rule(&self) -> DrawRule {
        self.rule
    }

    /// Pieces handed out so far; also the id the next piece will carry.
    pub fn pieces_created(&self) -> u64 {
        self.next_id
    }

    fn refill_bag7(&mut self) {
        self.bag = [
            Kind::I,
            Kind::O,
            Kind::T,
            Kind::L,
            Kind::J,
            Kind::S,
            Kind::Z,
        ];
        self.bag.shuffle(&mut self.rng);
        self.bag_idx = 0;
    }

    fn draw_kind(&mut self) -> Kind {
        match self.rule {
            DrawRule::Uniform => *Kind::all().choose(&mut self.rng).unwrap(),
            DrawRule::Bag7 => {
                if self.bag_idx >= 7 {
                    self.refill_bag7();
                }
                let k = self.bag[self.bag_idx];
                self.bag_idx += 1;
                k
            }
        }
    }

    pub fn create(&mut self) -> Piece {
        let kind = self.draw_kind();
        let id = self.next_id;
        self.next_id += 1;
        Piece { kind, id }
    }
}
