//! Key mapping from terminal events to user actions.

use crate::types::UserAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a user action.
pub fn map_key(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        // Directions: figure control during play, level/speed tuning in the menu
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(UserAction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(UserAction::Right),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(UserAction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(UserAction::Down),

        // Rotate
        KeyCode::Char(' ') | KeyCode::Char('x') => Some(UserAction::Action),

        // Session control
        KeyCode::Enter => Some(UserAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(UserAction::Pause),

        _ => None,
    }
}

/// Check if the key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_direction_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(UserAction::Left)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(UserAction::Right)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(UserAction::Up));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(UserAction::Down)
        );

        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(UserAction::Left)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(UserAction::Right)
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(UserAction::Start)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(UserAction::Pause)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(UserAction::Action)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
