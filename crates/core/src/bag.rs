//! Bag module - per-level shuffled piece queue
//!
//! The bag holds a shuffled copy of the current level's multiset. Pieces are
//! drawn from the front; when the last one is drawn the bag is refilled from
//! the multiset of the level active *at that moment* and shuffled again.
//! Already-queued pieces are never rewritten by a level change.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

#[derive(Debug, Clone)]
pub struct Bag {
    queue: VecDeque<PieceKind>,
    rng: StdRng,
}

impl Bag {
    /// Create a bag filled from `multiset`, shuffled with a seeded RNG
    pub fn new(seed: u64, multiset: &[PieceKind]) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), multiset)
    }

    pub fn from_rng(rng: StdRng, multiset: &[PieceKind]) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(multiset.len()),
            rng,
        };
        bag.refill(multiset);
        bag
    }

    /// Discard the queue and start over from `multiset` (session reset)
    pub fn restart(&mut self, multiset: &[PieceKind]) {
        self.queue.clear();
        self.refill(multiset);
    }

    fn refill(&mut self, multiset: &[PieceKind]) {
        let source = if multiset.is_empty() {
            &PieceKind::ALL[..]
        } else {
            multiset
        };
        self.queue.extend(source.iter().copied());
        self.queue.make_contiguous().shuffle(&mut self.rng);
    }

    /// Draw the front piece.
    ///
    /// `multiset` is the current level's composition; it is only used when
    /// this draw empties the bag.
    pub fn next(&mut self, multiset: &[PieceKind]) -> PieceKind {
        if self.queue.is_empty() {
            self.refill(multiset);
        }
        // refill never leaves the queue empty
        let kind = self.queue.pop_front().unwrap_or(PieceKind::T);
        if self.queue.is_empty() {
            self.refill(multiset);
        }
        kind
    }

    /// Piece the next draw will return
    pub fn peek(&self) -> Option<PieceKind> {
        self.queue.front().copied()
    }

    /// Pieces left before the next refill
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
