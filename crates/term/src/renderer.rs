//! TerminalRenderer: the crossterm-backed region sink.
//!
//! Every write is queued into an in-memory buffer; `flush` hands the whole
//! buffer to the device in one `write_all` so a render pass never shows up
//! half-drawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::sink::RegionSink;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed run.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Bytes queued since the last flush
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

/// Current terminal size as (cols, rows)
pub fn query_terminal_size() -> Result<(u16, u16)> {
    Ok(terminal::size()?)
}

fn palette_color(index: Option<u8>) -> Color {
    match index {
        Some(i) => Color::AnsiValue(i),
        None => Color::Reset,
    }
}

impl<W: Write> RegionSink for TerminalRenderer<W> {
    fn write_styled_region(
        &mut self,
        row: u16,
        col: u16,
        content: &str,
        fg: Option<u8>,
        bg: Option<u8>,
    ) -> Result<()> {
        self.buf.queue(cursor::MoveTo(col, row))?;
        self.buf.queue(SetForegroundColor(palette_color(fg)))?;
        self.buf.queue(SetBackgroundColor(palette_color(bg)))?;
        self.buf.queue(Print(content))?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.flush_buf()
    }
}
