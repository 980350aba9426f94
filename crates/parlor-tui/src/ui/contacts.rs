//! Contacts list
//!
//! Displays the address book with presence labels.

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
const SEARCH_ROW: &str = "  Search...";

/// Render the contacts list.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // Inert search row, rendered above the contacts but not focusable.
    let mut items =
        vec![ListItem::new(Span::styled(SEARCH_ROW, Style::default().fg(Color::DarkGray)))];

    items.extend(app.directory().contacts().iter().enumerate().map(|(idx, contact)| {
        let under_cursor = idx == app.list_cursor();
        let prefix = if under_cursor { CURSOR_PREFIX } else { PLAIN_PREFIX };
        let name_style = if under_cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let status_color = if contact.online { Color::Green } else { Color::DarkGray };

        ListItem::new(vec![
            Line::from(vec![
                Span::raw(prefix),
                Span::raw(contact.avatar),
                Span::raw(" "),
                Span::styled(contact.name, name_style),
            ]),
            Line::from(vec![
                Span::raw("     "),
                Span::styled(contact.status, Style::default().fg(status_color)),
            ]),
        ])
    }));

    let block = Block::default().borders(Borders::ALL).title(" Contacts ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
