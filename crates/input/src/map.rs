//! Key mapping from terminal events to game actions.
//!
//! One press maps to at most one action; there is no repeat buffering, and
//! the caller drops terminal auto-repeat events before asking.

use blockfall_types::PlayAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a gameplay action.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayAction> {
    match key.code {
        // Rotation
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Up => Some(PlayAction::Rotate),

        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(PlayAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(PlayAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(PlayAction::MoveDown),

        // Hard drop
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char(' ') => {
            Some(PlayAction::HardDrop)
        }

        _ => None,
    }
}

/// Whether a key confirms on the title and game-over screens.
pub fn is_confirm(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

/// Whether a key should quit the process.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(PlayAction::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(PlayAction::Rotate)
        );
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(PlayAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(PlayAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(PlayAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(PlayAction::MoveLeft)
        );
    }

    #[test]
    fn test_hard_drop_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(PlayAction::HardDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(PlayAction::HardDrop)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_confirm_key() {
        assert!(is_confirm(KeyEvent::from(KeyCode::Enter)));
        assert!(!is_confirm(KeyEvent::from(KeyCode::Char(' '))));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
