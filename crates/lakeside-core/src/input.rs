//! Host event port.
//!
//! The terminal host turns raw input into [`HostEvent`]s; anything that can
//! produce them (a real terminal, a scripted test feed) implements
//! [`EventSource`].

use std::io;
use std::time::Duration;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Backspace,
    Esc,
    /// Ctrl+C.
    Interrupt,
}

/// One input event from the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The viewport now spans `columns` x `rows` cells.
    Resized { columns: u16, rows: u16 },
    Key(KeyInput),
    /// The pointer moved over the given cell.
    PointerMoved { column: u16, row: u16 },
}

/// Source of host events.
pub trait EventSource {
    /// Wait up to `timeout` for the next event. `Ok(None)` means the timeout
    /// elapsed without input.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<HostEvent>>;
}
