//! Terminal frontend for the parlor messenger.
//!
//! A thin shell over [`parlor_app::App`] that provides terminal-specific
//! I/O: the async event loop in [`runtime`] and the ratatui widget tree in
//! [`ui`]. All state transitions live in the app crate; this crate only
//! translates terminal events in and draws state out.

pub mod runtime;
pub mod ui;

pub use parlor_app::{App, AppAction, AppEvent, KeyInput};
