//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    // Terminals with the keyboard enhancement protocol also report releases.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Movement: arrows, WASD and vi keys
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => {
            Some(GameAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => {
            Some(GameAction::Move(Direction::Right))
        }

        KeyCode::Char('z' | 'Z' | 'u' | 'U') => Some(GameAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NextLevel),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::PrevLevel),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Confirm),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameAction::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(GameAction::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Left), Some(GameAction::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(GameAction::Move(Direction::Right)));

        assert_eq!(key(KeyCode::Char('W')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Char('s')), Some(GameAction::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Char('a')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('D')), Some(GameAction::Move(Direction::Right)));

        assert_eq!(key(KeyCode::Char('k')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Char('J')), Some(GameAction::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Char('h')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('l')), Some(GameAction::Move(Direction::Right)));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char('z')), Some(GameAction::Undo));
        assert_eq!(key(KeyCode::Char('U')), Some(GameAction::Undo));
        assert_eq!(key(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(key(KeyCode::Char('n')), Some(GameAction::NextLevel));
        assert_eq!(key(KeyCode::Char('p')), Some(GameAction::PrevLevel));
        assert_eq!(key(KeyCode::Enter), Some(GameAction::Confirm));
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::Confirm));
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Tab), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
        let release_q = KeyEvent {
            code: KeyCode::Char('q'),
            ..release
        };
        assert!(!should_quit(release_q));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
