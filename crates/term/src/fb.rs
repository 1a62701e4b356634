//! In-memory screen used as a render target in tests and tools.

use anyhow::Result;

use crate::sink::RegionSink;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<u8>,
    pub bg: Option<u8>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Writes outside the buffer are clipped, like a real terminal with line
/// wrap disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    /// Number of region writes since creation
    writes: usize,
    flushes: usize,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            writes: 0,
            flushes: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, blanking it.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// `len` characters of row `y` starting at column `x`
    pub fn text_at(&self, x: u16, y: u16, len: u16) -> String {
        (x..x.saturating_add(len))
            .filter_map(|cx| self.get(cx, y))
            .map(|c| c.ch)
            .collect()
    }

    /// A whole row as text
    pub fn row_text(&self, y: u16) -> String {
        self.text_at(0, y, self.width)
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Forget the write counter (to measure one render pass)
    pub fn reset_counters(&mut self) {
        self.writes = 0;
        self.flushes = 0;
    }
}

impl RegionSink for FrameBuffer {
    fn write_styled_region(
        &mut self,
        row: u16,
        col: u16,
        content: &str,
        fg: Option<u8>,
        bg: Option<u8>,
    ) -> Result<()> {
        self.writes += 1;
        let mut cx = col;
        for ch in content.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, row, Cell { ch, fg, bg });
            cx += 1;
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.cells.fill(Cell::default());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
