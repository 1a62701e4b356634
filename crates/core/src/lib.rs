//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all session state. It has **zero
//! dependencies** on the terminal or on I/O: the same seed and the same
//! sequence of calls produce the same game, which is what the tests and the
//! benches rely on.
//!
//! # Module Structure
//!
//! - [`grid`]: 16-wide locked-cell field with row clearing
//! - [`tetromino`]: piece matrices, rotation and spawn geometry
//! - [`physics`]: collision test, lock fuse, move and step outcomes
//! - [`bag`]: per-level shuffled piece queue
//! - [`scoring`]: drop, lock and line-clear rewards
//! - [`tuning`]: per-level speed, fuse, palette, threshold and bag tables
//! - [`dirty`]: dirty-region flags consumed by the renderer
//! - [`session`]: the complete game state
//!
//! # Game Rules
//!
//! - **Gravity**: one row per `fall_speed` loop iterations, faster at higher levels
//! - **Lock fuse**: a resting piece waits `fuse` gravity steps; maneuvers extend it
//! - **Hold**: stash or swap the falling piece once per lock
//! - **Game over**: a piece locking above the top edge resets the session
//!
//! # Example
//!
//! ```
//! use termtris_core::GameSession;
//!
//! let mut session = GameSession::new(20, 12345);
//! session.move_right();
//! session.rotate_cw();
//! session.hard_drop();
//!
//! // Hard drop scores every row it falls
//! assert!(session.score() > 0);
//! ```

pub mod bag;
pub mod dirty;
pub mod grid;
pub mod physics;
pub mod scoring;
pub mod session;
pub mod tetromino;
pub mod tuning;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use bag::Bag;
pub use dirty::{DirtySet, Region};
pub use grid::Grid;
pub use physics::{has_collision, Fuse, MoveOutcome, Rejection, StepOutcome};
pub use scoring::{drop_score, line_clear_score, lock_cell_score};
pub use session::{GameSession, ResetReason, SessionEvent};
pub use tetromino::{nudge_into_bounds, Tetromino};
pub use tuning::{LevelTuning, Tuning};
