//! Static difficulty and color tables, indexed by level (0-9).
//!
//! Colors are ANSI-256 palette indices. Palette rows are indexed by
//! [`PieceKind::id`](crate::PieceKind::id).
//!
//! | Level | Lines needed | Fall speed | Fuse | Bag copies |
//! |-------|--------------|------------|------|------------|
//! | 0 | 0 | 3000 | 10 | 2 |
//! | 1 | 5 | 2900 | 9 | 2 |
//! | 2 | 10 | 2700 | 8 | 2 |
//! | 3 | 15 | 2400 | 7 | 3 |
//! | 4 | 20 | 2000 | 6 | 3 |
//! | 5 | 30 | 1500 | 6 | 3 |
//! | 6 | 40 | 1000 | 5 | 4 |
//! | 7 | 50 | 800 | 5 | 4 |
//! | 8 | 65 | 600 | 4 | 4 |
//! | 9 | 80 | 500 | 3 | 5 |
//!
//! Fall speed counts loop iterations between gravity steps; the fuse counts
//! gravity steps.

/// Number of levels in every table below
pub const LEVEL_COUNT: usize = 10;

/// Background of the play field and the preview boxes
pub const GAME_BG: u8 = 16;

/// Sidebar label color
pub const SIDEBAR_FG: u8 = 255;

/// Sidebar background
pub const SIDEBAR_BG: u8 = 241;

/// Score/level/lines value color
pub const STAT_FG: u8 = 231;

/// Score/level/lines value background
pub const STAT_BG: u8 = 16;

/// Guide column glyph color (dim grey)
pub const GUIDE_FG: u8 = 240;

/// Block palette per level
pub const COLOR_BY_LEVEL: [[u8; 7]; LEVEL_COUNT] = [
    [57, 172, 21, 196, 40, 226, 39],
    [57, 124, 208, 220, 34, 39, 25],
    [147, 183, 105, 171, 135, 169, 201],
    [17, 52, 94, 63, 29, 172, 56],
    [161, 196, 166, 208, 204, 168, 129],
    [232, 237, 240, 244, 247, 250, 253],
    [16, 16, 16, 16, 16, 16, 16],
    [16, 16, 16, 16, 16, 16, 16],
    [16, 16, 16, 16, 16, 16, 16],
    [16, 16, 16, 16, 16, 16, 16],
];

/// Loop iterations between gravity steps per level
pub const SPEED_BY_LEVEL: [u32; LEVEL_COUNT] =
    [3000, 2900, 2700, 2400, 2000, 1500, 1000, 800, 600, 500];

/// Lock fuse length (gravity steps) per level
pub const FUSE_BY_LEVEL: [u32; LEVEL_COUNT] = [10, 9, 8, 7, 6, 6, 5, 5, 4, 3];

/// How many copies of every kind go into one bag per level
pub const BAG_COPIES_BY_LEVEL: [usize; LEVEL_COUNT] = [2, 2, 2, 3, 3, 3, 4, 4, 4, 5];

/// Cumulative cleared lines required to reach each level
pub const LEVEL_BY_LINES: [u32; LEVEL_COUNT] = [0, 5, 10, 15, 20, 30, 40, 50, 65, 80];

/// Loop sleep between iterations (microseconds)
pub const TICK_SLEEP_US: u64 = 100;

/// Iterations before the first terminal size poll
pub const SIZE_POLL_FIRST: u32 = 10_000;

/// Iterations between later terminal size polls
pub const SIZE_POLL_INTERVAL: u32 = 1_000;

/// Fuse ticks added by a successful lateral move while resting
pub const FUSE_BONUS_SHIFT: u32 = 1;

/// Fuse ticks added by a successful rotation while resting
pub const FUSE_BONUS_ROTATE: u32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds_are_strictly_increasing() {
        for pair in LEVEL_BY_LINES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(LEVEL_BY_LINES[0], 0);
    }

    #[test]
    fn later_levels_are_not_easier() {
        for i in 1..LEVEL_COUNT {
            assert!(SPEED_BY_LEVEL[i] <= SPEED_BY_LEVEL[i - 1]);
            assert!(FUSE_BY_LEVEL[i] <= FUSE_BY_LEVEL[i - 1]);
            assert!(BAG_COPIES_BY_LEVEL[i] >= BAG_COPIES_BY_LEVEL[i - 1]);
        }
    }
}
