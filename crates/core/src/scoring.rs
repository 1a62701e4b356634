//! Scoring module - drop, lock and line-clear rewards
//!
//! Every reward scales with `(1 + level/5)`. The products are evaluated in
//! integers with the same floor as the real-valued formulas:
//!
//! | Event | Formula |
//! |-------|---------|
//! | one row of gravity | `floor(1 * (1 + level/5) * (3 if dropping else 1))` |
//! | each locked subcell | `floor(10 * (1 + level/5))` |
//! | `n` rows cleared | `floor(1000 * (1 + level/5) * (1 + (n-1)/4))` |

/// Multiplier for rows fallen during a hard or soft drop
pub const DROP_MULTIPLIER: u64 = 3;

/// Score for one row of gravity
pub fn drop_score(level: usize, dropping: bool) -> u64 {
    let mult = if dropping { DROP_MULTIPLIER } else { 1 };
    (5 + level as u64) * mult / 5
}

/// Score for each subcell merged into the grid on lock
pub fn lock_cell_score(level: usize) -> u64 {
    10 * (5 + level as u64) / 5
}

/// Score for clearing `lines` rows in one lock.
///
/// Multi-line clears pay super-linearly: each extra row adds a quarter of
/// the single-row reward on top of the per-row amount.
pub fn line_clear_score(level: usize, lines: u32) -> u64 {
    if lines == 0 {
        return 0;
    }
    1000 * (5 + level as u64) * (3 + lines as u64) / 20
}
