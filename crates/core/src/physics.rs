//! Physics module - collision test, lock fuse and move/step outcomes
//!
//! Geometry functions here never touch timers. Movement reports a
//! [`MoveOutcome`]; whoever drives the session decides whether a successful
//! move extends the fuse.

use crate::grid::Grid;
use crate::tetromino::Tetromino;
use crate::types::{PieceKind, GRID_WIDTH};

/// True if `piece` placed with its top-left corner at (x, y) overlaps
/// something.
///
/// An occupied subcell collides when it lands outside the columns, below the
/// bottom row, or on an occupied grid cell. Subcells above the top edge
/// (negative row) never collide, so pieces can spawn partly off-screen.
pub fn has_collision(grid: &Grid, piece: &Tetromino, x: i32, y: i32) -> bool {
    piece.minos().iter().any(|&(r, c)| {
        let row = y + r as i32;
        let col = x + c as i32;
        if col < 0 || col >= GRID_WIDTH as i32 || row >= grid.height() as i32 {
            return true;
        }
        if row < 0 {
            return false;
        }
        grid.cell_at(row as usize, col as usize).is_some()
    })
}

/// Lock-delay countdown, measured in gravity steps.
///
/// `None` means the piece is not resting on anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fuse {
    remaining: Option<u32>,
}

impl Fuse {
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_lit(&self) -> bool {
        self.remaining.is_some()
    }

    /// Piece moved freely: forget any pending lock.
    pub fn clear(&mut self) {
        self.remaining = None;
    }

    /// One resting gravity step.
    ///
    /// Lights the fuse at `length` on the first resting step, otherwise
    /// counts down. Returns true when the piece must lock.
    pub fn burn(&mut self, length: u32) -> bool {
        match self.remaining {
            None => {
                self.remaining = Some(length);
                false
            }
            Some(n) => {
                let n = n.saturating_sub(1);
                self.remaining = Some(n);
                n == 0
            }
        }
    }

    /// Add `ticks` to a lit, unexpired fuse. Returns whether it was extended.
    ///
    /// There is no cap: continuous maneuvering can keep a piece alive.
    pub fn extend(&mut self, ticks: u32) -> bool {
        match self.remaining {
            Some(n) if n > 0 => {
                self.remaining = Some(n + ticks);
                true
            }
            _ => false,
        }
    }

    /// Zero the fuse so the next resting step locks.
    pub fn expire(&mut self) {
        self.remaining = Some(0);
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The new position or shape overlaps the grid or its edges
    Collision,
    /// Hold was already used since the last lock
    HoldUnavailable,
}

/// Result of a movement, rotation or hold request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub success: bool,
    pub reason: Option<Rejection>,
}

impl MoveOutcome {
    pub fn moved() -> Self {
        Self {
            success: true,
            reason: None,
        }
    }

    pub fn rejected(reason: Rejection) -> Self {
        Self {
            success: false,
            reason: Some(reason),
        }
    }
}

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved down one row
    Fell,
    /// Blocked below; the fuse has this many steps left
    Resting { fuse: u32 },
    /// Merged into the grid; `cleared` rows were removed
    Locked { kind: PieceKind, cleared: u32 },
    /// Locked while poking above the field; the session was reset
    GameOver,
}

impl StepOutcome {
    /// The piece is gone (locked or game over)
    pub fn ended_piece(&self) -> bool {
        matches!(self, StepOutcome::Locked { .. } | StepOutcome::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_exempts_rows_above_field() {
        let grid = Grid::new(4);
        let bar = Tetromino::new(PieceKind::I);
        // Rows -4..-1: all above the field.
        assert!(!has_collision(&grid, &bar, 0, -4));
        // Rows 0..3: fits exactly.
        assert!(!has_collision(&grid, &bar, 0, 0));
        // Row 4 is below the floor.
        assert!(has_collision(&grid, &bar, 0, 1));
    }

    #[test]
    fn test_collision_checks_columns_and_cells() {
        let mut grid = Grid::new(4);
        let o = Tetromino::new(PieceKind::O);
        assert!(has_collision(&grid, &o, -1, 0));
        assert!(has_collision(&grid, &o, 15, 0));
        assert!(!has_collision(&grid, &o, 14, 0));

        grid.set_cell(3, 5, Some(PieceKind::T));
        assert!(has_collision(&grid, &o, 4, 2));
        assert!(!has_collision(&grid, &o, 6, 2));
    }

    #[test]
    fn test_collision_ignores_padding() {
        // T padding at (1,0) may overlap an occupied cell.
        let mut grid = Grid::new(4);
        grid.set_cell(3, 0, Some(PieceKind::I));
        let t = Tetromino::new(PieceKind::T);
        assert!(!has_collision(&grid, &t, 0, 2));
    }

    #[test]
    fn test_fuse_lights_then_counts_down() {
        let mut fuse = Fuse::default();
        assert!(!fuse.burn(2));
        assert_eq!(fuse.remaining(), Some(2));
        assert!(!fuse.burn(2));
        assert!(fuse.burn(2));
    }

    #[test]
    fn test_fuse_extend_only_when_lit_and_positive() {
        let mut fuse = Fuse::default();
        assert!(!fuse.extend(1));

        fuse.burn(3);
        assert!(fuse.extend(2));
        assert_eq!(fuse.remaining(), Some(5));

        fuse.expire();
        assert!(!fuse.extend(2));
        assert!(fuse.burn(3));
    }
}
