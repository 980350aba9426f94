//! View state
//!
//! [`Tab`] enumerates the five navigation destinations and [`MainView`]
//! describes what the main panel currently shows.

use parlor_model::ChatId;

/// Navigation tab in the sidebar rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Chat threads list.
    Chats,
    /// Address book.
    Contacts,
    /// Call history.
    Calls,
    /// Local user's profile card.
    Profile,
    /// Settings panel.
    Settings,
}

impl Tab {
    /// All tabs in rail order.
    pub const ALL: [Self; 5] =
        [Self::Chats, Self::Contacts, Self::Calls, Self::Profile, Self::Settings];

    /// Panel title shown in the list header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Chats => "Chats",
            Self::Contacts => "Contacts",
            Self::Calls => "Calls",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// The next tab in rail order, wrapping at the end.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous tab in rail order, wrapping at the start.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Map a digit key to its tab. `'1'` is chats, `'5'` is settings.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Chats),
            '2' => Some(Self::Contacts),
            '3' => Some(Self::Calls),
            '4' => Some(Self::Profile),
            '5' => Some(Self::Settings),
            _ => None,
        }
    }

    /// Whether this tab drives the list panel with a scrollable list.
    pub fn has_list(self) -> bool {
        matches!(self, Self::Chats | Self::Contacts | Self::Calls)
    }
}

/// What the main panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    /// "Select a chat" placeholder.
    Placeholder,
    /// Open conversation with the given chat.
    Conversation(ChatId),
    /// The profile card.
    Profile,
    /// The settings rows.
    Settings,
}
