//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Release events map to nothing; only presses and repeats act.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::HardDrop),

        // Rotation
        KeyCode::Char('.') | KeyCode::Char('>') => Some(GameAction::RotateCw),
        KeyCode::Char(',') | KeyCode::Char('<') => Some(GameAction::RotateCcw),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Hold),
        KeyCode::Char('p') => Some(GameAction::Pause),
        KeyCode::Char('g') => Some(GameAction::ToggleGuides),

        // Level
        KeyCode::Char('=') | KeyCode::Char('+') => Some(GameAction::LevelUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::LevelDown),

        KeyCode::Char('!') => Some(GameAction::DebugDump),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
