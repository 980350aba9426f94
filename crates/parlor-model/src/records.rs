//! Record shapes
//!
//! Flat record types rendered by the panels. All text fields are `'static`
//! because every record is a baked-in fixture.

/// Stable identifier of a chat thread.
pub type ChatId = u32;

/// Stable identifier of a contact.
pub type ContactId = u32;

/// Stable identifier of a call log entry.
pub type CallId = u32;

/// Stable identifier of a message.
pub type MessageId = u32;

/// A chat thread as shown in the chats list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    /// Thread identifier, unique within the chats list.
    pub id: ChatId,
    /// Display name of the counterpart or group.
    pub name: &'static str,
    /// Preview of the most recent message.
    pub last_message: &'static str,
    /// Human-readable timestamp label ("14:23", "Yesterday").
    pub time: &'static str,
    /// Number of unread messages. Zero hides the badge.
    pub unread: u32,
    /// Avatar glyph.
    pub avatar: &'static str,
    /// Whether the counterpart is currently online.
    pub online: bool,
}

/// An address-book entry as shown in the contacts list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Contact identifier, unique within the contacts list.
    pub id: ContactId,
    /// Display name.
    pub name: &'static str,
    /// Presence label ("Online", "Last seen yesterday").
    pub status: &'static str,
    /// Avatar glyph.
    pub avatar: &'static str,
    /// Whether the contact is currently online.
    pub online: bool,
}

/// Media kind of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Voice-only call.
    Audio,
    /// Video call.
    Video,
}

impl CallKind {
    /// Short label for list rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

/// A call-history entry as shown in the calls list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Call identifier, unique within the calls list.
    pub id: CallId,
    /// Display name of the counterpart or group.
    pub name: &'static str,
    /// Media kind of the call.
    pub kind: CallKind,
    /// Human-readable timestamp label ("Today, 14:00").
    pub time: &'static str,
    /// Duration label ("12:34").
    pub duration: &'static str,
    /// `true` for incoming calls, `false` for outgoing.
    pub incoming: bool,
    /// Avatar glyph.
    pub avatar: &'static str,
}

/// Content kind of a message.
///
/// Only [`MessageKind::Text`] occurs in the fixture transcript; the other
/// kinds exist in the shape but have no instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Plain text.
    Text,
    /// Image attachment.
    Image,
    /// Video attachment.
    Video,
    /// Audio attachment.
    Audio,
}

/// A message in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message identifier, unique within the transcript.
    pub id: MessageId,
    /// Message text.
    pub text: &'static str,
    /// Human-readable timestamp label ("14:20").
    pub time: &'static str,
    /// `true` when the local user authored the message.
    pub is_mine: bool,
    /// Content kind.
    pub kind: MessageKind,
}

/// The local user's profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Display name.
    pub name: &'static str,
    /// Public handle ("@ivan_petrov").
    pub handle: &'static str,
    /// Phone number label.
    pub phone: &'static str,
    /// Email address label.
    pub email: &'static str,
    /// Registration date label.
    pub member_since: &'static str,
    /// Whether the local user shows as online.
    pub online: bool,
}

/// A row in the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEntry {
    /// Setting title ("Notifications").
    pub title: &'static str,
    /// Detail label below the title.
    pub detail: &'static str,
}
