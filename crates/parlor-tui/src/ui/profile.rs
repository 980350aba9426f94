//! Profile panel
//!
//! Displays the local user's profile card.

use parlor_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the profile card.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let profile = app.directory().profile();

    let presence = if profile.online {
        Span::styled("Online", Style::default().fg(Color::Green))
    } else {
        Span::styled("Offline", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {}", profile.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", profile.handle),
            Style::default().fg(Color::Cyan),
        )),
        Line::default(),
        Line::from(vec![Span::raw("  "), presence]),
        Line::default(),
        Line::from(format!("  Phone   {}", profile.phone)),
        Line::from(format!("  Email   {}", profile.email)),
        Line::from(format!("  Member since   {}", profile.member_since)),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}
