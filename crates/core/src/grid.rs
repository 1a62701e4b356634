//! Grid module - the locked-cell play field
//!
//! The grid is 16 columns wide and as tall as the terminal. Rows are stored
//! top to bottom; each row is a fixed-width array so every row always has the
//! same width.
//! Coordinates: (row, col) where row 0 is the top terminal line.

use crate::types::{Cell, GRID_WIDTH};

/// One grid row
pub type Row = [Cell; GRID_WIDTH];

const EMPTY_ROW: Row = [None; GRID_WIDTH];

/// The play field - 16 columns x `height` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create an empty grid with `height` rows
    pub fn new(height: usize) -> Self {
        Self {
            rows: vec![EMPTY_ROW; height],
        }
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, col).
    ///
    /// Callers pre-validate coordinates through collision checks; an
    /// out-of-range position is a programming error and panics.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Overwrite the cell at (row, col). Same contract as [`Grid::cell_at`].
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.rows[row][col] = cell;
    }

    /// Bounds-tolerant lookup used by collision checks.
    ///
    /// Returns `None` outside the grid, `Some(cell)` inside.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 || col >= GRID_WIDTH as i32 {
            return None;
        }
        self.rows.get(row as usize).map(|r| r[col as usize])
    }

    /// True iff every cell of the row is occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .map(|r| r.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Remove a row and push an empty row in at the top.
    ///
    /// Rows above `row` shift down by one; the row count is unchanged.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows.len() {
            return;
        }
        self.rows.remove(row);
        self.rows.insert(0, EMPTY_ROW);
    }

    /// Remove every full row, scanning top to bottom.
    ///
    /// After a removal the same index is scanned again since the row above
    /// has shifted into it. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = 0;
        while row < self.rows.len() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
                // Re-scan this index: the row above moved into it.
                continue;
            }
            row += 1;
        }
        cleared
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.iter().all(|c| c.is_none()))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Plain-text snapshot: one line per row, `-` for empty, the kind id otherwise.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (GRID_WIDTH + 1));
        for row in &self.rows {
            for cell in row {
                match cell {
                    None => out.push('-'),
                    Some(kind) => out.push(char::from(b'0' + kind.id())),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Build a grid from text rows (`-`/`.` empty, id digit or kind letter filled).
    ///
    /// Short rows are padded with empty cells. Intended for tests.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new(rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(GRID_WIDTH).enumerate() {
                let cell = match ch {
                    '0'..='6' => crate::types::PieceKind::from_id(ch as u8 - b'0'),
                    '-' | '.' | ' ' => None,
                    other => crate::types::PieceKind::from_str(&other.to_string()),
                };
                grid.rows[r][c] = cell;
            }
        }
        grid
    }
}
