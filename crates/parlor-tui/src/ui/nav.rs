//! Navigation rail
//!
//! Displays the five tabs with their digit shortcuts and the total
//! unread badge on the chats entry.

use parlor_app::{App, Tab};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const ACTIVE_PREFIX: &str = ">";
const INACTIVE_PREFIX: &str = " ";

/// Render the navigation rail.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let unread = app.directory().unread_total();

    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, &tab)| {
            let active = tab == app.active_tab();
            let prefix = if active { ACTIVE_PREFIX } else { INACTIVE_PREFIX };
            let style = if active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let label = format!("{prefix}{} {}", idx + 1, tab.title());
            let badge = if tab == Tab::Chats && unread > 0 {
                format!(" {unread}")
            } else {
                String::new()
            };

            ListItem::new(Line::from(vec![
                Span::styled(label, style),
                Span::styled(badge, Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Parlor ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
