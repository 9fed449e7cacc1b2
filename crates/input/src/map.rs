//! Key mapping from terminal events to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// The two supported control schemes for lane movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    Arrows,
    Qd,
}

impl ControlScheme {
    /// Parse a scheme selector (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arrows" => Some(ControlScheme::Arrows),
            "qd" => Some(ControlScheme::Qd),
            _ => None,
        }
    }

    pub fn bindings(&self) -> KeyBindings {
        match self {
            ControlScheme::Arrows => KeyBindings::arrows(),
            ControlScheme::Qd => KeyBindings::qd(),
        }
    }
}

/// Which physical keys drive lane movement.
///
/// Explicit configuration, passed in at construction; nothing downstream of
/// the mapping ever inspects key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
}

impl KeyBindings {
    pub fn arrows() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
        }
    }

    pub fn qd() -> Self {
        Self {
            left: KeyCode::Char('q'),
            right: KeyCode::Char('d'),
        }
    }
}

/// Map a key press to a game intent.
///
/// Enter maps to Start; the binary converts it to Restart when the session
/// is already over (Enter means "go" in both phases). `r` is an explicit
/// restart.
pub fn map_key(key: KeyEvent, bindings: &KeyBindings) -> Option<GameAction> {
    if key.code == bindings.left {
        return Some(GameAction::MoveLeft);
    }
    if key.code == bindings.right {
        return Some(GameAction::MoveRight);
    }
    match key.code {
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check whether a key should quit the program.
///
/// Esc or Ctrl-C only; `q` belongs to the Q-D movement scheme.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
