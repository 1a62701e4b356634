//! Per-level tuning, lifted from the static tables into a value the session owns.
//!
//! The standard game uses [`Tuning::standard`]. Tests build their own tables
//! (short fuses, single-kind bags) with [`Tuning::new`].

use crate::types::tuning::{
    BAG_COPIES_BY_LEVEL, COLOR_BY_LEVEL, FUSE_BY_LEVEL, LEVEL_BY_LINES, LEVEL_COUNT, SPEED_BY_LEVEL,
};
use crate::types::PieceKind;

/// Everything that changes when the level changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTuning {
    /// ANSI-256 block color per piece id
    pub palette: [u8; 7],
    /// Loop iterations between gravity steps
    pub fall_speed: u32,
    /// Gravity steps a resting piece waits before locking
    pub fuse: u32,
    /// Cumulative lines needed to reach this level
    pub threshold: u32,
    /// Multiset the bag is refilled from
    pub bag: Vec<PieceKind>,
}

/// Ordered level table. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    levels: Vec<LevelTuning>,
}

impl Tuning {
    /// Build a table from explicit levels.
    ///
    /// Returns `None` for an empty table or a level with an empty bag.
    pub fn new(levels: Vec<LevelTuning>) -> Option<Self> {
        if levels.is_empty() || levels.iter().any(|l| l.bag.is_empty()) {
            return None;
        }
        Some(Self { levels })
    }

    /// The shipped ten-level table
    pub fn standard() -> Self {
        let levels = (0..LEVEL_COUNT)
            .map(|i| LevelTuning {
                palette: COLOR_BY_LEVEL[i],
                fall_speed: SPEED_BY_LEVEL[i],
                fuse: FUSE_BY_LEVEL[i],
                threshold: LEVEL_BY_LINES[i],
                bag: bag_with_copies(BAG_COPIES_BY_LEVEL[i]),
            })
            .collect();
        Self { levels }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Highest valid level index
    pub fn max_level(&self) -> usize {
        self.levels.len() - 1
    }

    /// Tuning for `level`, clamped to the table
    pub fn level(&self, level: usize) -> &LevelTuning {
        &self.levels[level.min(self.max_level())]
    }

    /// Highest level whose threshold is at or below `lines`.
    ///
    /// Scans from the top of the table down, so the first hit wins.
    pub fn level_for_lines(&self, lines: u32) -> usize {
        self.levels
            .iter()
            .rposition(|l| l.threshold <= lines)
            .unwrap_or(0)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

/// `copies` of every kind, in id order
pub fn bag_with_copies(copies: usize) -> Vec<PieceKind> {
    PieceKind::ALL
        .iter()
        .flat_map(|&kind| std::iter::repeat(kind).take(copies))
        .collect()
}
