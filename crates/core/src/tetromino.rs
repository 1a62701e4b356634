//! Tetromino module - shape catalogue and matrix rotation
//!
//! A piece is a minimal bounding matrix of cells. Rotation transposes the
//! matrix and flips it, so orientation is never stored separately: the
//! matrix itself is the orientation.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, GRID_WIDTH};

/// Largest side of any bounding matrix (the I bar)
pub const MAX_DIM: usize = 4;

/// Occupied (row, col) offsets of a piece, relative to its top-left corner
pub type Minos = ArrayVec<(usize, usize), 4>;

/// Spawn layouts; `#` is occupied, `.` is padding.
fn pattern(kind: PieceKind) -> &'static [&'static str] {
    match kind {
        PieceKind::T => &["###", ".#."],
        PieceKind::L => &["#.", "#.", "##"],
        PieceKind::J => &[".#", ".#", "##"],
        PieceKind::Z => &["##.", ".##"],
        PieceKind::S => &[".##", "##."],
        PieceKind::O => &["##", "##"],
        PieceKind::I => &["#", "#", "#", "#"],
    }
}

/// A piece matrix: `height` rows of `width` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    width: usize,
    height: usize,
    cells: [[Cell; MAX_DIM]; MAX_DIM],
}

impl Tetromino {
    /// Spawn-orientation piece of the given kind
    pub fn new(kind: PieceKind) -> Self {
        let rows = pattern(kind);
        let mut cells = [[None; MAX_DIM]; MAX_DIM];
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.bytes().enumerate() {
                if ch == b'#' {
                    cells[r][c] = Some(kind);
                }
            }
        }
        Self {
            kind,
            width: rows[0].len(),
            height: rows.len(),
            cells,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Columns in the bounding matrix
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows in the bounding matrix
    pub fn height(&self) -> usize {
        self.height
    }

    /// Subcell at (row, col); `None` for padding or outside the matrix
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row][col]
    }

    /// Occupied subcells, top to bottom then left to right
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for r in 0..self.height {
            for c in 0..self.width {
                if self.cells[r][c].is_some() {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Quarter turn clockwise: `new[j][h-1-i] = old[i][j]`
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width, self.height);
        let mut cells = [[None; MAX_DIM]; MAX_DIM];
        for i in 0..h {
            for j in 0..w {
                cells[j][h - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            kind: self.kind,
            width: h,
            height: w,
            cells,
        }
    }

    /// Quarter turn counter-clockwise: `new[w-1-j][i] = old[i][j]`
    pub fn rotated_ccw(&self) -> Self {
        let (w, h) = (self.width, self.height);
        let mut cells = [[None; MAX_DIM]; MAX_DIM];
        for i in 0..h {
            for j in 0..w {
                cells[w - 1 - j][i] = self.cells[i][j];
            }
        }
        Self {
            kind: self.kind,
            width: h,
            height: w,
            cells,
        }
    }

    /// Spawn column: centered on the grid, rounded left
    pub fn spawn_x(&self) -> i32 {
        ((GRID_WIDTH - self.width) / 2) as i32
    }

    /// Spawn row: fully above the visible field
    pub fn spawn_y(&self) -> i32 {
        -(self.height as i32)
    }
}

/// Shift a rotated piece's origin left/up until its box fits the grid.
///
/// Mirrors the simple corner nudge used instead of kick tables: only the
/// right and bottom edges are considered.
pub fn nudge_into_bounds(piece: &Tetromino, mut x: i32, mut y: i32, grid_height: usize) -> (i32, i32) {
    while x + piece.width() as i32 > GRID_WIDTH as i32 {
        x -= 1;
    }
    while y + piece.height() as i32 > grid_height as i32 {
        y -= 1;
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_four_minos_each() {
        for kind in PieceKind::ALL {
            assert_eq!(Tetromino::new(kind).minos().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_t_rotates_clockwise_to_point_left() {
        // ###      .#
        // .#.  ->  ##
        //          .#
        let t = Tetromino::new(PieceKind::T).rotated_cw();
        assert_eq!((t.width(), t.height()), (2, 3));
        assert_eq!(t.minos().as_slice(), &[(0, 1), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_cw_then_ccw_is_identity() {
        for kind in PieceKind::ALL {
            let p = Tetromino::new(kind);
            assert_eq!(p.rotated_cw().rotated_ccw(), p);
        }
    }

    #[test]
    fn test_spawn_position() {
        let i = Tetromino::new(PieceKind::I);
        assert_eq!((i.spawn_x(), i.spawn_y()), (7, -4));
        let t = Tetromino::new(PieceKind::T);
        assert_eq!((t.spawn_x(), t.spawn_y()), (6, -2));
    }

    #[test]
    fn test_nudge_pulls_wide_box_back_inside() {
        // Horizontal I at x=14 would span columns 14..18.
        let bar = Tetromino::new(PieceKind::I).rotated_cw();
        assert_eq!(nudge_into_bounds(&bar, 14, 0, 10), (12, 0));
        // Vertical I near the floor.
        let tall = Tetromino::new(PieceKind::I);
        assert_eq!(nudge_into_bounds(&tall, 0, 8, 10), (0, 6));
    }
}
