//! Input events
//!
//! Everything the runtime can feed into [`crate::App::handle`].

use crate::input::KeyInput;

/// An input event consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press, already translated from the backend event type.
    Key(KeyInput),
    /// Periodic timer tick.
    Tick,
    /// Terminal was resized to the given width and height.
    Resize(u16, u16),
}
