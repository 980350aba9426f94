//! Chats list
//!
//! Displays the chat threads with unread badges, presence markers, and
//! the last-message preview.

use parlor_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const CURSOR_PREFIX: &str = "> ";
const PLAIN_PREFIX: &str = "  ";
const ONLINE_MARKER: &str = " *";
const SEARCH_ROW: &str = "  Search...";

/// Render the chats list.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // Inert search row, rendered above the threads but not focusable.
    let mut items =
        vec![ListItem::new(Span::styled(SEARCH_ROW, Style::default().fg(Color::DarkGray)))];

    items.extend(app.directory().chats().iter().enumerate().map(|(idx, chat)| {
        let under_cursor = idx == app.list_cursor();
        let open = app.selected_chat() == Some(chat.id);

        let prefix = if under_cursor { CURSOR_PREFIX } else { PLAIN_PREFIX };
        let name_style = if under_cursor || open {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let online = if chat.online { ONLINE_MARKER } else { "" };
        let badge = if chat.unread > 0 { format!(" ({})", chat.unread) } else { String::new() };

        ListItem::new(vec![
            Line::from(vec![
                Span::raw(prefix),
                Span::raw(chat.avatar),
                Span::raw(" "),
                Span::styled(chat.name, name_style),
                Span::styled(online, Style::default().fg(Color::Green)),
                Span::styled(badge, Style::default().fg(Color::Red)),
            ]),
            Line::from(vec![
                Span::raw("     "),
                Span::styled(chat.last_message, Style::default().fg(Color::DarkGray)),
                Span::styled(format!("  {}", chat.time), Style::default().fg(Color::DarkGray)),
            ]),
        ])
    }));

    let block = Block::default().borders(Borders::ALL).title(" Chats ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
