//! Settings panel
//!
//! Displays the settings rows with their detail labels.

use parlor_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the settings rows.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .directory()
        .settings()
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("  {}", entry.title),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("    {}", entry.detail),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Settings ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
