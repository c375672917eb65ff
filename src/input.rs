//! Key handling for the play screen.
//!
//! Space is the only key the game itself understands. Esc, `q` and Ctrl-C
//! tear the view down; they never reach the game.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the host loop should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Forward to the game.
    Game(GameInput),
    /// Leave the game and restore the terminal.
    Quit,
    /// Not a key press (release/repeat); nothing to do.
    Continue,
}

pub fn handle_key(key: KeyEvent) -> InputResult {
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char(' ') => InputResult::Game(GameInput::Activate),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputResult::Quit,
        _ => InputResult::Game(GameInput::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_activates() {
        assert_eq!(
            handle_key(press(KeyCode::Char(' '))),
            InputResult::Game(GameInput::Activate)
        );
    }

    #[test]
    fn test_other_keys_forwarded_as_other() {
        for code in [KeyCode::Enter, KeyCode::Up, KeyCode::Char('w')] {
            assert_eq!(handle_key(press(code)), InputResult::Game(GameInput::Other));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key(press(KeyCode::Esc)), InputResult::Quit);
        assert_eq!(handle_key(press(KeyCode::Char('q'))), InputResult::Quit);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputResult::Quit
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(release), InputResult::Continue);
    }
}
