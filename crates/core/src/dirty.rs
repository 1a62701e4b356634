//! Dirty-region tracking for the incremental renderer.
//!
//! Each UI region is either clean or dirty. Any mutation that affects a
//! region marks it; the renderer clears a region exactly when it redraws it.

/// A separately redrawn part of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Sidebar backgrounds and labels; only dirtied by a full redraw
    Chrome,
    /// Locked cells of the play field
    Board,
    /// The falling piece
    Falling,
    /// Hold preview box
    Held,
    /// Next-piece preview box
    Next,
    /// Score value
    Score,
    /// Level value
    Level,
    /// Cleared-lines value
    Lines,
}

impl Region {
    /// Every region, in redraw order
    pub const ALL: [Region; 8] = [
        Region::Chrome,
        Region::Board,
        Region::Falling,
        Region::Held,
        Region::Next,
        Region::Score,
        Region::Level,
        Region::Lines,
    ];

    /// Regions that depend on the level (palette or the level value itself)
    pub const LEVEL_DEPENDENT: [Region; 5] = [
        Region::Board,
        Region::Falling,
        Region::Held,
        Region::Next,
        Region::Level,
    ];

    #[inline(always)]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bitset of dirty regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirtySet(u8);

impl DirtySet {
    /// All regions clean
    pub fn new() -> Self {
        Self(0)
    }

    /// All regions dirty
    pub fn all() -> Self {
        let mut set = Self::new();
        set.mark_all();
        set
    }

    pub fn mark(&mut self, region: Region) {
        self.0 |= region.bit();
    }

    pub fn mark_many(&mut self, regions: &[Region]) {
        for &region in regions {
            self.mark(region);
        }
    }

    /// Force a full redraw
    pub fn mark_all(&mut self) {
        self.mark_many(&Region::ALL);
    }

    pub fn is_dirty(&self, region: Region) -> bool {
        self.0 & region.bit() != 0
    }

    pub fn clear(&mut self, region: Region) {
        self.0 &= !region.bit();
    }

    /// Clear `region`, returning whether it was dirty
    pub fn take(&mut self, region: Region) -> bool {
        let was = self.is_dirty(region);
        self.clear(region);
        was
    }

    pub fn is_clean(&self) -> bool {
        self.0 == 0
    }

    /// Dirty regions in redraw order
    pub fn iter(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL.into_iter().filter(|r| self.is_dirty(*r))
    }
}
