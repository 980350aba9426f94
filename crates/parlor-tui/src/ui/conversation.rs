//! Conversation panel
//!
//! Displays the transcript of the open chat with the draft input line
//! below it. The transcript keeps the newest messages visible when it
//! outgrows the panel.

use parlor_app::App;
use parlor_model::ChatId;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::input;

const BORDER_SIZE: u16 = 2;
const TRANSCRIPT_MIN_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;

/// Render the conversation panel for the given chat.
pub fn render(frame: &mut Frame, app: &App, chat_id: ChatId, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(TRANSCRIPT_MIN_HEIGHT), Constraint::Length(INPUT_HEIGHT)])
        .split(area);

    let [transcript_area, input_area] = chunks.as_ref() else {
        return;
    };

    render_transcript(frame, app, chat_id, *transcript_area);
    input::render(frame, app.draft(), *input_area);
}

fn render_transcript(frame: &mut Frame, app: &App, chat_id: ChatId, area: Rect) {
    let (title, counterpart) = app.directory().chat(chat_id).map_or_else(
        || (" Chat ".to_string(), "them"),
        |chat| {
            let presence = if chat.online { " (online)" } else { "" };
            (format!(" {}{presence} ", chat.name), chat.name)
        },
    );

    let block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = app
        .directory()
        .messages()
        .iter()
        .map(|msg| {
            let (sender, color) =
                if msg.is_mine { ("you", Color::Cyan) } else { (counterpart, Color::Green) };

            ListItem::new(Line::from(vec![
                Span::styled(sender, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::raw(msg.text),
                Span::styled(format!("  {}", msg.time), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
