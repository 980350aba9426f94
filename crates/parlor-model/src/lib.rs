//! Data model for the parlor messenger UI.
//!
//! Defines the flat record shapes shown in the panels ([`Chat`],
//! [`Contact`], [`Call`], [`Message`]) plus the static profile and settings
//! payloads, and the [`Directory`] that owns the sample data set. Everything
//! here is a session constant: records are never created, mutated, or
//! deleted at runtime.

mod directory;
mod records;

pub use directory::Directory;
pub use records::{
    Call, CallId, CallKind, Chat, ChatId, Contact, ContactId, Message, MessageId, MessageKind,
    Profile, SettingsEntry,
};
