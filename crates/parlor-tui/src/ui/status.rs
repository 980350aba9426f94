//! Status bar
//!
//! Displays the active tab, the total unread count, and the key hints
//! for the current mode.

use parlor_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const BROWSE_HINTS: &str = "Tab: switch | Enter: open | q: quit";
const CONVERSATION_HINTS: &str = "Enter: send | Esc: back";

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let tab = Span::styled(app.active_tab().title(), Style::default().add_modifier(Modifier::BOLD));

    let unread = app.directory().unread_total();
    let unread_info = if unread > 0 { format!(" | Unread: {unread}") } else { String::new() };

    let hints = if app.conversation_open() { CONVERSATION_HINTS } else { BROWSE_HINTS };

    let status_line = Line::from(vec![
        Span::raw(" "),
        tab,
        Span::raw(unread_info),
        Span::raw(" | "),
        Span::raw(hints),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
