//! Sushi tower generation and advancement
//!
//! The tower is a queue: the front is the next piece the player must knock
//! off, the back is the most recently stacked piece. Every resolved piece is
//! replaced by exactly one new piece, so the tower never runs dry mid-game.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Side, TowerPiece};
use crate::consts::ROLL_RANGE;
use crate::tuning::Tuning;

/// Ordered queue of pending pieces plus the seeded generator feeding it
#[derive(Debug, Clone)]
pub struct Tower {
    pieces: VecDeque<TowerPiece>,
    /// Fixed plate everything stacks on; always tagged None
    base: TowerPiece,
    rng: Pcg32,
    next_id: u32,
    left_weight: u32,
    right_weight: u32,
    piece_spacing: f32,
    tower_base_y: f32,
    settle_rate: f32,
}

impl Tower {
    /// Create an empty tower with the given seed
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let base_pos = Vec2::new(0.0, tuning.tower_base_y - tuning.piece_spacing);
        Self {
            pieces: VecDeque::new(),
            base: TowerPiece::new(0, Side::None, base_pos, 0),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            left_weight: tuning.left_weight,
            right_weight: tuning.right_weight,
            piece_spacing: tuning.piece_spacing,
            tower_base_y: tuning.tower_base_y,
            settle_rate: tuning.settle_rate,
        }
    }

    /// Replace the tower contents with `count` freshly generated pieces
    pub fn initialize(&mut self, count: usize) {
        self.pieces.clear();
        for _ in 0..count {
            let side = self.generate_one();
            self.append_piece(side);
        }
        log::debug!("Tower initialized with {} pieces", self.pieces.len());
    }

    /// Pick the tag for the next piece
    ///
    /// A directional back piece forces None so two chopsticks are never
    /// stacked directly on top of each other. Otherwise roll [0, 100):
    /// Left below `left_weight`, Right below `left_weight + right_weight`,
    /// None for the rest.
    pub fn generate_one(&mut self) -> Side {
        if self.back_side().is_directional() {
            return Side::None;
        }

        let roll = self.rng.random_range(0..ROLL_RANGE);
        if roll < self.left_weight {
            Side::Left
        } else if roll < self.left_weight.saturating_add(self.right_weight) {
            Side::Right
        } else {
            Side::None
        }
    }

    /// Stack a new piece on top of the current back piece
    pub fn append_piece(&mut self, side: Side) -> TowerPiece {
        let last = self.pieces.back().unwrap_or(&self.base);
        let piece = TowerPiece::new(
            self.next_id,
            side,
            Vec2::new(last.pos.x, last.pos.y + self.piece_spacing),
            last.z + 1,
        );
        self.next_id += 1;
        self.pieces.push_back(piece);
        piece
    }

    /// Remove and return the front piece
    ///
    /// # Panics
    ///
    /// Panics if the tower is empty. Callers replenish one piece per pop, so
    /// reaching this is a logic error.
    pub fn pop_front(&mut self) -> TowerPiece {
        match self.pieces.pop_front() {
            Some(piece) => piece,
            None => panic!("pop_front called on an empty tower"),
        }
    }

    /// Pop the front piece and stack one generated replacement
    ///
    /// Returns `None` without touching the tower if it is empty.
    pub fn advance(&mut self) -> Option<(TowerPiece, TowerPiece)> {
        if self.pieces.is_empty() {
            return None;
        }
        let resolved = self.pop_front();
        let side = self.generate_one();
        let added = self.append_piece(side);
        Some((resolved, added))
    }

    /// Tag of the front piece, if any
    pub fn front_tag(&self) -> Option<Side> {
        self.pieces.front().map(|p| p.side)
    }

    /// Tag of the back piece (the base plate when empty)
    pub fn back_side(&self) -> Side {
        self.pieces.back().map_or(self.base.side, |p| p.side)
    }

    /// Ease every piece toward its resting height for its rank
    pub fn settle(&mut self) {
        for (rank, piece) in self.pieces.iter_mut().enumerate() {
            let target = rank as f32 * self.piece_spacing + self.tower_base_y;
            piece.pos.y -= (piece.pos.y - target) * self.settle_rate;
        }
    }

    /// Pieces front to back
    pub fn pieces(&self) -> impl ExactSizeIterator<Item = &TowerPiece> {
        self.pieces.iter()
    }

    /// Tags front to back
    pub fn sides(&self) -> Vec<Side> {
        self.pieces.iter().map(|p| p.side).collect()
    }

    pub fn base(&self) -> &TowerPiece {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
