//! Keyboard input plumbing shared by the runner.

pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Input events the runner cares about.
pub enum InputEvent {
    Key(KeyEvent),
    Resize,
    Other,
}

/// Returns true when an event is available within `timeout`.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(key) => InputEvent::Key(key),
        Event::Resize(_, _) => InputEvent::Resize,
        _ => InputEvent::Other,
    })
}
