use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::components::{InputEvent, MoveDirection, RotationDirection};

/// What a key press asks of the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(InputEvent),
    Quit,
}

/// Maps a key event to an action. Releases and unbound keys map to `None`;
/// Enter only restarts once the game is over.
#[must_use]
pub fn map_key(key: KeyEvent, game_over: bool) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let event = match key.code {
        KeyCode::Char('q' | 'Q') => return Some(KeyAction::Quit),
        KeyCode::Enter if game_over => InputEvent::Restart,
        KeyCode::Down | KeyCode::Char('s' | 'S') => InputEvent::Move(MoveDirection::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => InputEvent::Move(MoveDirection::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => InputEvent::Move(MoveDirection::Right),
        KeyCode::Char('r' | 'R') => InputEvent::Rotate(RotationDirection::Clockwise),
        KeyCode::Char('e' | 'E') => InputEvent::Rotate(RotationDirection::CounterClockwise),
        KeyCode::Char('p' | 'P') => InputEvent::TogglePause,
        _ => return None,
    };
    Some(KeyAction::Game(event))
}
