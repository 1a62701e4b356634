//! GameView: the dirty-flag render pass.
//!
//! Each call to [`GameView::render`] redraws exactly the regions the session
//! has marked dirty and clears their flags. The falling piece is moved by
//! repainting the grid cells under its previous footprint and then drawing it
//! at its new position; nothing else on screen is touched.

use std::fmt::Write as _;

use anyhow::Result;

use crate::core::{GameSession, Region, Tetromino};
use crate::layout::{Layout, Stat, BOX_HEIGHT, BOX_LABEL_ROW, BOX_TOP, BOX_WIDTH, STAT_COL};
use crate::sink::RegionSink;
use crate::types::tuning::{GAME_BG, GUIDE_FG, SIDEBAR_BG, SIDEBAR_FG, STAT_BG, STAT_FG};
use crate::types::{Cell, PieceKind, CELL_CHARS, GLYPH_BLOCK, GLYPH_EMPTY, GLYPH_GUIDE, GRID_WIDTH};

/// Glyph and colors for one grid cell
type Paint = (&'static str, Option<u8>, Option<u8>);

pub struct GameView {
    layout: Layout,
    /// Grid (row, col) cells the falling piece occupied when last drawn
    footprint: Vec<(usize, usize)>,
    text: String,
}

impl GameView {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            layout: Layout::new(cols, rows),
            footprint: Vec::with_capacity(4),
            text: String::with_capacity(64),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Adopt a new terminal size. The session should be reset alongside.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.layout = Layout::new(cols, rows);
        self.footprint.clear();
    }

    /// Force a full redraw on the next pass.
    pub fn invalidate(&mut self, session: &mut GameSession) {
        self.footprint.clear();
        session.dirty_mut().mark_all();
    }

    /// Redraw every dirty region, clearing its flag.
    pub fn render<S: RegionSink>(&mut self, session: &mut GameSession, sink: &mut S) -> Result<()> {
        if session.dirty_mut().take(Region::Chrome) {
            sink.clear_screen()?;
            self.draw_chrome(sink)?;
            self.footprint.clear();
        }

        if session.dirty_mut().take(Region::Board) {
            self.draw_board(session, sink)?;
            // The board repaint wiped the piece.
            self.footprint.clear();
            session.dirty_mut().mark(Region::Falling);
        }

        if session.dirty_mut().take(Region::Falling) {
            self.draw_falling(session, sink)?;
        }

        if session.dirty_mut().take(Region::Held) {
            let left = self.layout.hold_box_left();
            draw_box(sink, left, session.held(), session.palette())?;
        }

        if session.dirty_mut().take(Region::Next) {
            let left = self.layout.next_box_left();
            draw_box(sink, left, Some(session.next()), session.palette())?;
        }

        if session.dirty_mut().take(Region::Score) {
            self.draw_stat(sink, Stat::Score, session.score())?;
        }
        if session.dirty_mut().take(Region::Level) {
            // Levels are shown 1-based.
            self.draw_stat(sink, Stat::Level, session.level() as u64 + 1)?;
        }
        if session.dirty_mut().take(Region::Lines) {
            self.draw_stat(sink, Stat::Lines, session.lines() as u64)?;
        }

        Ok(())
    }

    fn draw_chrome<S: RegionSink>(&mut self, sink: &mut S) -> Result<()> {
        let layout = self.layout;
        let left = " ".repeat(layout.left_width() as usize);
        let right = " ".repeat(layout.right_width() as usize);
        let (fg, bg) = (Some(SIDEBAR_FG), Some(SIDEBAR_BG));

        for row in 0..layout.rows {
            if !left.is_empty() {
                sink.write_styled_region(row, 0, &left, fg, bg)?;
            }
            if !right.is_empty() {
                sink.write_styled_region(row, layout.right_left(), &right, fg, bg)?;
            }
        }

        if !left.is_empty() {
            sink.write_styled_region(BOX_LABEL_ROW, layout.hold_box_left(), "Hold:", fg, bg)?;
            for stat in [Stat::Score, Stat::Level, Stat::Lines] {
                sink.write_styled_region(stat.label_row(), STAT_COL, stat.label(), fg, bg)?;
            }
        }
        if !right.is_empty() {
            sink.write_styled_region(BOX_LABEL_ROW, layout.next_box_left(), "Next:", fg, bg)?;
        }
        Ok(())
    }

    fn draw_board<S: RegionSink>(&self, session: &GameSession, sink: &mut S) -> Result<()> {
        let grid = session.grid();
        for row in 0..grid.height() {
            for col in 0..GRID_WIDTH {
                let (glyph, fg, bg) = cell_paint(grid.cell_at(row, col), col, session);
                sink.write_styled_region(row as u16, self.layout.cell_col(col), glyph, fg, bg)?;
            }
        }
        Ok(())
    }

    fn draw_falling<S: RegionSink>(&mut self, session: &GameSession, sink: &mut S) -> Result<()> {
        let grid = session.grid();

        // Erase: put back whatever the grid holds under the old footprint.
        for &(row, col) in &self.footprint {
            if row < grid.height() {
                let (glyph, fg, bg) = cell_paint(grid.cell_at(row, col), col, session);
                sink.write_styled_region(row as u16, self.layout.cell_col(col), glyph, fg, bg)?;
            }
        }
        self.footprint.clear();

        let piece = session.falling();
        let (x, y) = session.position();
        let bg = Some(session.palette()[piece.kind().id() as usize]);
        for (r, c) in piece.minos() {
            let row = y + r as i32;
            let col = x + c as i32;
            if row < 0 || row as usize >= grid.height() || col < 0 || col as usize >= GRID_WIDTH {
                continue;
            }
            let (row, col) = (row as usize, col as usize);
            sink.write_styled_region(row as u16, self.layout.cell_col(col), GLYPH_BLOCK, None, bg)?;
            self.footprint.push((row, col));
        }
        Ok(())
    }

    fn draw_stat<S: RegionSink>(&mut self, sink: &mut S, stat: Stat, value: u64) -> Result<()> {
        self.text.clear();
        let width = self.layout.stat_width();
        let _ = write!(self.text, "{value:<width$}");
        sink.write_styled_region(stat.value_row(), STAT_COL, &self.text, Some(STAT_FG), Some(STAT_BG))
    }
}

/// How an occupied or empty grid cell looks.
///
/// With guides on, empty cells in odd columns show a dim double bar.
fn cell_paint(cell: Cell, col: usize, session: &GameSession) -> Paint {
    match cell {
        Some(kind) => block_paint(kind, session.palette()),
        None if session.guides() && col % 2 == 1 => (GLYPH_GUIDE, Some(GUIDE_FG), Some(GAME_BG)),
        None => (GLYPH_EMPTY, None, Some(GAME_BG)),
    }
}

fn block_paint(kind: PieceKind, palette: &[u8; 7]) -> Paint {
    (GLYPH_BLOCK, None, Some(palette[kind.id() as usize]))
}

/// Blank a preview box and draw `piece` centered in it.
fn draw_box<S: RegionSink>(
    sink: &mut S,
    left: u16,
    piece: Option<&Tetromino>,
    palette: &[u8; 7],
) -> Result<()> {
    const BLANK: &str = "          ";
    debug_assert_eq!(BLANK.len(), BOX_WIDTH as usize);

    for i in 0..BOX_HEIGHT {
        sink.write_styled_region(BOX_TOP + i, left, BLANK, None, Some(GAME_BG))?;
    }

    let Some(piece) = piece else {
        return Ok(());
    };

    let w = piece.width() as u16;
    let h = piece.height() as u16;
    let px = left + (BOX_WIDTH / 2).saturating_sub(w);
    let py = BOX_TOP + (BOX_HEIGHT + 1).saturating_sub(h) / 2;
    let (glyph, fg, bg) = block_paint(piece.kind(), palette);
    for (r, c) in piece.minos() {
        sink.write_styled_region(py + r as u16, px + c as u16 * CELL_CHARS, glyph, fg, bg)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::FrameBuffer;

    #[test]
    fn test_render_clears_all_flags() {
        let mut session = GameSession::new(24, 1);
        let mut view = GameView::new(80, 24);
        let mut fb = FrameBuffer::new(80, 24);

        view.render(&mut session, &mut fb).unwrap();
        assert!(session.dirty().is_clean());
    }

    #[test]
    fn test_clean_session_writes_nothing() {
        let mut session = GameSession::new(24, 1);
        let mut view = GameView::new(80, 24);
        let mut fb = FrameBuffer::new(80, 24);

        view.render(&mut session, &mut fb).unwrap();
        fb.reset_counters();
        view.render(&mut session, &mut fb).unwrap();
        assert_eq!(fb.writes(), 0);
    }

    #[test]
    fn test_box_centers_piece() {
        let mut fb = FrameBuffer::new(20, 10);
        let palette = [1, 2, 3, 4, 5, 6, 7];
        let t = Tetromino::new(PieceKind::T);
        draw_box(&mut fb, 0, Some(&t), &palette).unwrap();

        // T is 3x2: columns 2..8, rows 4..6.
        assert_eq!(fb.text_at(0, 4, 10), "  [][][]  ");
        assert_eq!(fb.text_at(0, 5, 10), "    []    ");
        assert_eq!(fb.get(2, 4).unwrap().bg, Some(1));
        assert_eq!(fb.get(0, 4).unwrap().bg, Some(GAME_BG));
    }
}
