//! Sample directory
//!
//! The [`Directory`] owns every fixture list shown by the UI and exposes
//! read-only accessors. [`Directory::sample`] builds the canonical data set:
//! 4 chats, 5 contacts, 3 calls, a 4-message transcript, the profile card,
//! and 6 settings rows.

use crate::records::{
    Call, CallKind, Chat, ChatId, Contact, Message, MessageKind, Profile, SettingsEntry,
};

/// Read-only container for the session's fixture data.
#[derive(Debug, Clone)]
pub struct Directory {
    chats: Vec<Chat>,
    contacts: Vec<Contact>,
    calls: Vec<Call>,
    messages: Vec<Message>,
    profile: Profile,
    settings: Vec<SettingsEntry>,
}

impl Directory {
    /// Build the canonical sample data set.
    pub fn sample() -> Self {
        Self {
            chats: vec![
                Chat {
                    id: 1,
                    name: "Anna Ivanova",
                    last_message: "Hi! How are you?",
                    time: "14:23",
                    unread: 2,
                    avatar: "👩",
                    online: true,
                },
                Chat {
                    id: 2,
                    name: "Project Team",
                    last_message: "Sent the project files",
                    time: "13:45",
                    unread: 0,
                    avatar: "👥",
                    online: false,
                },
                Chat {
                    id: 3,
                    name: "Max",
                    last_message: "Call today?",
                    time: "12:10",
                    unread: 5,
                    avatar: "👨",
                    online: true,
                },
                Chat {
                    id: 4,
                    name: "Mom",
                    last_message: "Don't forget to stop by the store",
                    time: "Yesterday",
                    unread: 0,
                    avatar: "👩‍🦰",
                    online: false,
                },
            ],
            contacts: vec![
                Contact { id: 1, name: "Anna Ivanova", status: "Online", avatar: "👩", online: true },
                Contact { id: 2, name: "Max", status: "Online", avatar: "👨", online: true },
                Contact {
                    id: 3,
                    name: "Sergey Petrov",
                    status: "Last seen 2 hours ago",
                    avatar: "👨‍💼",
                    online: false,
                },
                Contact {
                    id: 4,
                    name: "Elena",
                    status: "Last seen yesterday",
                    avatar: "👩‍💻",
                    online: false,
                },
                Contact {
                    id: 5,
                    name: "Mom",
                    status: "Last seen 5 minutes ago",
                    avatar: "👩‍🦰",
                    online: false,
                },
            ],
            calls: vec![
                Call {
                    id: 1,
                    name: "Anna Ivanova",
                    kind: CallKind::Video,
                    time: "Today, 14:00",
                    duration: "12:34",
                    incoming: true,
                    avatar: "👩",
                },
                Call {
                    id: 2,
                    name: "Max",
                    kind: CallKind::Audio,
                    time: "Today, 11:20",
                    duration: "05:12",
                    incoming: false,
                    avatar: "👨",
                },
                Call {
                    id: 3,
                    name: "Project Team",
                    kind: CallKind::Video,
                    time: "Yesterday, 18:30",
                    duration: "45:00",
                    incoming: true,
                    avatar: "👥",
                },
            ],
            messages: vec![
                Message {
                    id: 1,
                    text: "Hi! How are you?",
                    time: "14:20",
                    is_mine: false,
                    kind: MessageKind::Text,
                },
                Message {
                    id: 2,
                    text: "Great! Working on a new project",
                    time: "14:21",
                    is_mine: true,
                    kind: MessageKind::Text,
                },
                Message {
                    id: 3,
                    text: "Sounds interesting! Tell me more?",
                    time: "14:22",
                    is_mine: false,
                    kind: MessageKind::Text,
                },
                Message {
                    id: 4,
                    text: "Sure! It's a messenger with a modern design",
                    time: "14:23",
                    is_mine: true,
                    kind: MessageKind::Text,
                },
            ],
            profile: Profile {
                name: "Ivan Petrov",
                handle: "@ivan_petrov",
                phone: "+7 (999) 123-45-67",
                email: "ivan@example.com",
                member_since: "January 15, 2024",
                online: true,
            },
            settings: vec![
                SettingsEntry { title: "Notifications", detail: "Sounds and alerts" },
                SettingsEntry { title: "Privacy", detail: "Who can see your profile" },
                SettingsEntry { title: "Appearance", detail: "Themes and color schemes" },
                SettingsEntry { title: "Language", detail: "Russian" },
                SettingsEntry { title: "Storage", detail: "Manage files and media" },
                SettingsEntry { title: "Security", detail: "Two-factor authentication" },
            ],
        }
    }

    /// All chat threads, in list order.
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// All contacts, in list order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Call history, most recent first.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// The conversation transcript shown for the open chat.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The local user's profile card.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Settings rows, in panel order.
    pub fn settings(&self) -> &[SettingsEntry] {
        &self.settings
    }

    /// Look up a chat by id. `None` if no chat has that id.
    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    /// Total unread messages across all chats.
    pub fn unread_total(&self) -> u32 {
        self.chats.iter().map(|c| c.unread).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_unique(ids: &[u32]) -> bool {
        let mut seen = ids.to_vec();
        seen.sort_unstable();
        seen.dedup();
        seen.len() == ids.len()
    }

    #[test]
    fn sample_has_fixed_cardinalities() {
        let dir = Directory::sample();

        assert_eq!(dir.chats().len(), 4);
        assert_eq!(dir.contacts().len(), 5);
        assert_eq!(dir.calls().len(), 3);
        assert_eq!(dir.messages().len(), 4);
        assert_eq!(dir.settings().len(), 6);
    }

    #[test]
    fn ids_are_unique_within_each_list() {
        let dir = Directory::sample();

        assert!(ids_unique(&dir.chats().iter().map(|c| c.id).collect::<Vec<_>>()));
        assert!(ids_unique(&dir.contacts().iter().map(|c| c.id).collect::<Vec<_>>()));
        assert!(ids_unique(&dir.calls().iter().map(|c| c.id).collect::<Vec<_>>()));
        assert!(ids_unique(&dir.messages().iter().map(|m| m.id).collect::<Vec<_>>()));
    }

    #[test]
    fn transcript_is_text_only() {
        let dir = Directory::sample();

        assert!(dir.messages().iter().all(|m| m.kind == MessageKind::Text));
    }

    #[test]
    fn chat_lookup_by_id() {
        let dir = Directory::sample();

        assert_eq!(dir.chat(3).map(|c| c.name), Some("Max"));
        assert!(dir.chat(99).is_none());
    }

    #[test]
    fn unread_total_sums_badges() {
        let dir = Directory::sample();

        assert_eq!(dir.unread_total(), 7);
    }
}
