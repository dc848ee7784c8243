//! Key and mouse mapping from terminal events to engine inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// The designated turn key ("hold A to turn").
pub fn is_turn_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('a') | KeyCode::Char('A'))
}

/// Retry the lock (bumps the session reset counter).
pub fn is_reset_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Terminal cell the pointer moved to, if the event is a movement.
///
/// Drags count as movement: terminals report motion with a held button as a
/// drag, and the pick should follow either way.
pub fn pointer_position(event: &MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some((event.column, event.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton};

    #[test]
    fn test_turn_key_both_cases() {
        assert!(is_turn_key(KeyCode::Char('a')));
        assert!(is_turn_key(KeyCode::Char('A')));
        assert!(!is_turn_key(KeyCode::Char('b')));
        assert!(!is_turn_key(KeyCode::Enter));
    }

    #[test]
    fn test_reset_key() {
        assert!(is_reset_key(KeyCode::Char('r')));
        assert!(is_reset_key(KeyCode::Char('R')));
        assert!(!is_reset_key(KeyCode::Char('a')));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_pointer_position_for_moves_and_drags() {
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(pointer_position(&moved), Some((12, 7)));

        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(pointer_position(&drag), Some((3, 4)));

        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(pointer_position(&press), None);
    }
}
