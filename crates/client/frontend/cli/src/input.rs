//! Keyboard translation for the CLI client.
//!
//! The session speaks browser-style key codes; this module is the only place
//! that knows about `crossterm` key events.

use client_frontend_core::keymap::keys;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Converts a crossterm key press into the key code the session dispatches.
///
/// Letters map to their uppercase ASCII value whatever the shift state.
/// Ctrl+C maps to the quit key.
pub fn key_code(key: KeyEvent) -> Option<u32> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(keys::Q);
    }

    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_alphanumeric() => Some(ch.to_ascii_uppercase() as u32),
        KeyCode::Left => Some(keys::LEFT),
        KeyCode::Up => Some(keys::UP),
        KeyCode::Right => Some(keys::RIGHT),
        KeyCode::Down => Some(keys::DOWN),
        KeyCode::Esc => Some(keys::ESCAPE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::keymap;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use game_core::Direction;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_vi_and_arrow_keys_to_same_direction() {
        let vi = key_code(key(KeyCode::Char('k'))).and_then(keymap::direction_for);
        let arrow = key_code(key(KeyCode::Up)).and_then(keymap::direction_for);
        assert_eq!(vi, Some(Direction::N));
        assert_eq!(arrow, vi);
    }

    #[test]
    fn letters_ignore_case() {
        assert_eq!(key_code(key(KeyCode::Char('m'))), Some(keys::M));
        assert_eq!(key_code(key(KeyCode::Char('M'))), Some(keys::M));
        assert_eq!(key_code(key(KeyCode::Char('y'))), Some(keys::Y));
    }

    #[test]
    fn maps_quit_keys() {
        assert_eq!(key_code(key(KeyCode::Esc)), Some(keys::ESCAPE));
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(key_code(ctrl_c), Some(keys::Q));
    }

    #[test]
    fn ignores_unknown_keys() {
        assert_eq!(key_code(key(KeyCode::Enter)), None);
        assert_eq!(key_code(key(KeyCode::Char('.'))), None);
        assert_eq!(key_code(key(KeyCode::F(1))), None);
    }
}
