//! Screen geometry: where the field, sidebars, boxes and stats go.
//!
//! The field is centered horizontally and fills the terminal height. Each
//! grid cell is two columns wide. Everything left of the field is the left
//! sidebar (hold box and stats); everything right of it is the right sidebar
//! (next box).

use crate::types::{CELL_CHARS, GRID_WIDTH};

/// Preview box size in terminal columns and rows
pub const BOX_WIDTH: u16 = 10;
pub const BOX_HEIGHT: u16 = 6;

/// Row of the "Hold:" and "Next:" labels
pub const BOX_LABEL_ROW: u16 = 1;
/// Top row of the preview boxes
pub const BOX_TOP: u16 = BOX_LABEL_ROW + 1;
/// Column of the stat labels and values
pub const STAT_COL: u16 = 2;

/// A stat line: label row with its value on the row below
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Score,
    Level,
    Lines,
}

impl Stat {
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Score => "Score:",
            Stat::Level => "Level:",
            Stat::Lines => "Lines:",
        }
    }

    pub fn label_row(&self) -> u16 {
        let first = BOX_TOP + BOX_HEIGHT + 1;
        match self {
            Stat::Score => first,
            Stat::Level => first + 3,
            Stat::Lines => first + 6,
        }
    }

    pub fn value_row(&self) -> u16 {
        self.label_row() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cols: u16,
    pub rows: u16,
    /// First terminal column of the field
    pub grid_left: u16,
}

impl Layout {
    pub fn new(cols: u16, rows: u16) -> Self {
        let half_field = (GRID_WIDTH as u16 * CELL_CHARS) / 2;
        Self {
            cols,
            rows,
            grid_left: (cols / 2).saturating_sub(half_field),
        }
    }

    /// Field width in terminal columns
    pub fn grid_width(&self) -> u16 {
        GRID_WIDTH as u16 * CELL_CHARS
    }

    /// Left sidebar spans columns `0..left_width()`
    pub fn left_width(&self) -> u16 {
        self.grid_left
    }

    /// First column of the right sidebar
    pub fn right_left(&self) -> u16 {
        self.grid_left.saturating_add(self.grid_width())
    }

    pub fn right_width(&self) -> u16 {
        self.cols.saturating_sub(self.right_left())
    }

    /// Terminal column of grid column `col`
    pub fn cell_col(&self, col: usize) -> u16 {
        self.grid_left + col as u16 * CELL_CHARS
    }

    /// Left column of the hold box
    pub fn hold_box_left(&self) -> u16 {
        (self.left_width() / 2).saturating_sub(BOX_WIDTH / 2)
    }

    /// Left column of the next box
    pub fn next_box_left(&self) -> u16 {
        self.right_left() + (self.right_width() / 2).saturating_sub(BOX_WIDTH / 2)
    }

    /// Width stat values are padded to
    pub fn stat_width(&self) -> usize {
        self.left_width().saturating_sub(STAT_COL + 2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_centered() {
        let layout = Layout::new(80, 24);
        assert_eq!(layout.grid_left, 24);
        assert_eq!(layout.right_left(), 56);
        assert_eq!(layout.right_width(), 24);
        assert_eq!(layout.cell_col(15), 54);
    }

    #[test]
    fn test_boxes_center_in_sidebars() {
        let layout = Layout::new(80, 24);
        assert_eq!(layout.hold_box_left(), 7);
        assert_eq!(layout.next_box_left(), 63);
    }

    #[test]
    fn test_narrow_terminal_saturates() {
        let layout = Layout::new(20, 10);
        assert_eq!(layout.grid_left, 0);
        assert_eq!(layout.hold_box_left(), 0);
        assert_eq!(layout.right_width(), 0);
        assert_eq!(layout.stat_width(), 0);
    }

    #[test]
    fn test_stat_rows_follow_boxes() {
        assert_eq!(Stat::Score.label_row(), 9);
        assert_eq!(Stat::Level.value_row(), 13);
        assert_eq!(Stat::Lines.value_row(), 16);
    }
}
