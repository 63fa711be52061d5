//! Crossterm-backed event source.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use lakeside_core::{EventSource, HostEvent, KeyInput};

/// Reads events from the terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<HostEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(translate(event::read()?))
    }
}

/// Map a crossterm event to a host event; anything the page ignores maps
/// to `None`.
pub fn translate(event: Event) -> Option<HostEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key).map(HostEvent::Key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
            column,
            row,
            ..
        }) => Some(HostEvent::PointerMoved { column, row }),
        Event::Resize(columns, rows) => Some(HostEvent::Resized { columns, rows }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<KeyInput> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
            Some(KeyInput::Interrupt)
        }
        (_, KeyCode::Char(ch)) => Some(KeyInput::Char(ch)),
        (_, KeyCode::Enter) => Some(KeyInput::Enter),
        (_, KeyCode::Tab) => Some(KeyInput::Tab),
        (_, KeyCode::BackTab) => Some(KeyInput::BackTab),
        (_, KeyCode::Backspace) => Some(KeyInput::Backspace),
        (_, KeyCode::Esc) => Some(KeyInput::Esc),
        _ => None,
    }
}
