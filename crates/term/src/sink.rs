//! The output seam between the render pass and a terminal.

use anyhow::Result;

/// Destination for styled text at absolute screen positions.
///
/// Colors are 256-color palette indices; `None` leaves the terminal default.
/// Rows and columns are 0-based.
pub trait RegionSink {
    fn write_styled_region(
        &mut self,
        row: u16,
        col: u16,
        content: &str,
        fg: Option<u8>,
        bg: Option<u8>,
    ) -> Result<()>;

    /// Blank the whole screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Push everything written since the last flush to the device
    fn flush(&mut self) -> Result<()>;
}
