//! Output actions
//!
//! Instructions returned by [`crate::App::handle`] for the runtime to
//! carry out. The state machine never performs I/O itself.

/// An instruction for the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the UI.
    Render,
    /// Shut down the application.
    Quit,
}
