//! Raw input events and their mapping to game commands

use crate::sim::{Command, TickInput};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Other,
}

/// A host input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Mouse button or touch
    PointerDown,
}

/// Input backend. `poll_events` must not block and returns everything
/// queued since the previous call.
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Map one event to a command. Phase filtering happens in the tick.
pub fn command_for(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::Quit => Some(Command::Quit),
        InputEvent::PointerDown => Some(Command::Restart),
        InputEvent::KeyDown(key) => match key {
            Key::Down => Some(Command::Start),
            Key::Space => Some(Command::Quit),
            Key::Left => Some(Command::MoveLeft),
            Key::Right => Some(Command::MoveRight),
            Key::Up => Some(Command::Fire),
            Key::Other => None,
        },
        InputEvent::KeyUp(key) => match key {
            Key::Left => Some(Command::ReleaseLeft),
            Key::Right => Some(Command::ReleaseRight),
            _ => None,
        },
    }
}

/// Build the tick input for one frame, keeping event order
pub fn tick_input(events: &[InputEvent]) -> TickInput {
    TickInput::new(events.iter().filter_map(command_for).collect())
}
