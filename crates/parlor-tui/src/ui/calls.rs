//! Calls list
//!
//! Displays the call history with direction, kind, and duration.

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
const INCOMING_ARROW: &str = "<-";
const OUTGOING_ARROW: &str = "->";

/// Render the calls list.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .directory()
        .calls()
        .iter()
        .enumerate()
        .map(|(idx, call)| {
            let under_cursor = idx == app.list_cursor();
            let prefix = if under_cursor { CURSOR_PREFIX } else { PLAIN_PREFIX };
            let name_style = if under_cursor {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let (arrow, arrow_color) = if call.incoming {
                (INCOMING_ARROW, Color::Green)
            } else {
                (OUTGOING_ARROW, Color::Blue)
            };
            let detail = format!("{} {} ({})", call.kind.label(), call.time, call.duration);

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(prefix),
                    Span::raw(call.avatar),
                    Span::raw(" "),
                    Span::styled(call.name, name_style),
                ]),
                Line::from(vec![
                    Span::raw("     "),
                    Span::styled(arrow, Style::default().fg(arrow_color)),
                    Span::raw(" "),
                    Span::styled(detail, Style::default().fg(Color::DarkGray)),
                ]),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Calls ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
