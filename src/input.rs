use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Direction(Direction),
    Quit,
    /// Anything else the terminal reports, including releases and resizes.
    Other,
}

pub fn classify(ev: &Event) -> KeyInput {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Release => KeyInput::Other,
        Event::Key(key) if is_ctrl_c(key) => KeyInput::Quit,
        Event::Key(KeyEvent { code, .. }) => match code {
            KeyCode::Up => KeyInput::Direction(Up),
            KeyCode::Down => KeyInput::Direction(Down),
            KeyCode::Left => KeyInput::Direction(Left),
            KeyCode::Right => KeyInput::Direction(Right),
            KeyCode::Esc => KeyInput::Quit,
            _ => KeyInput::Other,
        },
        _ => KeyInput::Other,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
