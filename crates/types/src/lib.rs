//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! used from the simulation core, the terminal renderer and the input layer.
//!
//! # Grid Dimensions
//!
//! - **Width**: 16 columns (indexed 0-15), fixed for a session
//! - **Height**: one row per terminal row; a height change resets the session
//!
//! # Piece Ids
//!
//! Each [`PieceKind`] has a stable numeric id. The id indexes the per-level
//! palettes in [`tuning`] and is the digit printed by the grid debug dump.
//!
//! | Id | Kind | Shape |
//! |----|------|-------|
//! | 0 | T | T-shaped |
//! | 1 | L | L-shaped |
//! | 2 | J | mirrored L |
//! | 3 | Z | Z-shaped |
//! | 4 | S | mirrored Z |
//! | 5 | O | 2x2 square |
//! | 6 | I | 4-long bar |
//!
//! # Examples
//!
//! ```
//! use termtris_types::{GameAction, PieceKind, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_id(6), Some(PieceKind::I));
//! assert_eq!(PieceKind::I.id(), 6);
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(GRID_WIDTH, 16);
//! ```

pub mod tuning;

/// Grid width in cells (16 columns)
pub const GRID_WIDTH: usize = 16;

/// Terminal columns used to draw one grid cell
pub const CELL_CHARS: u16 = 2;

/// Glyph for an occupied cell
pub const GLYPH_BLOCK: &str = "[]";

/// Glyph for an empty cell
pub const GLYPH_EMPTY: &str = "  ";

/// Glyph for an empty cell on a guide column
pub const GLYPH_GUIDE: &str = "||";

/// The seven tetromino piece kinds, in id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    T,
    L,
    J,
    Z,
    S,
    O,
    I,
}

impl PieceKind {
    /// Every kind, ordered by id.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::I,
    ];

    /// Stable numeric id (0-6).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its id.
    ///
    /// ```
    /// use termtris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(0), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_id(7), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
            PieceKind::I => "i",
        }
    }
}

/// A cell on the game grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Actions the controller dispatches to the game session.
///
/// Every action is produced by exactly one key family in the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Expire the fall countdown and the lock fuse right away
    SoftDrop,
    /// Drop and lock the piece immediately
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Stash or swap the falling piece
    Hold,
    /// Toggle pause state
    Pause,
    /// Toggle the dim guide columns on the grid
    ToggleGuides,
    /// Raise the level by one (bounded by the tuning table)
    LevelUp,
    /// Lower the level by one (bounded at 0)
    LevelDown,
    /// Print a plain-text grid snapshot and exit
    DebugDump,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("levelUp"), Some(GameAction::LevelUp));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "toggleguides" => Some(GameAction::ToggleGuides),
            "levelup" => Some(GameAction::LevelUp),
            "leveldown" => Some(GameAction::LevelDown),
            "debugdump" => Some(GameAction::DebugDump),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase name (used in the event log)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::ToggleGuides => "toggleGuides",
            GameAction::LevelUp => "levelUp",
            GameAction::LevelDown => "levelDown",
            GameAction::DebugDump => "debugDump",
            GameAction::Quit => "quit",
        }
    }
}
