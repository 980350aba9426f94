//! UI rendering
//!
//! Rendering functions that convert [`App`] state into terminal output
//! using ratatui widgets. All functions are pure (no I/O), taking state
//! and an area and drawing widgets into the frame.

mod calls;
mod chats;
mod contacts;
mod conversation;
mod input;
mod nav;
mod profile;
mod settings;
mod status;

use parlor_app::{App, MainView, Tab};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, app, *main_area);
    status::render(frame, app, *status_area);
}

/// Render the main area (nav rail + list panel + main panel).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    const NAV_WIDTH: u16 = 14;
    const LIST_PANEL_WIDTH: u16 = 32;
    const MAIN_PANEL_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(NAV_WIDTH),
            Constraint::Length(LIST_PANEL_WIDTH),
            Constraint::Min(MAIN_PANEL_MIN_WIDTH),
        ])
        .split(area);

    let [nav_area, list_area, main_area] = chunks.as_ref() else {
        return;
    };

    nav::render(frame, app, *nav_area);
    render_list_panel(frame, app, *list_area);
    render_main_panel(frame, app, *main_area);
}

/// Render the list panel for the active tab.
fn render_list_panel(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_tab() {
        Tab::Chats => chats::render(frame, app, area),
        Tab::Contacts => contacts::render(frame, app, area),
        Tab::Calls => calls::render(frame, app, area),
        Tab::Profile | Tab::Settings => {
            let title = format!(" {} ", app.active_tab().title());
            let block = Block::default().borders(Borders::ALL).title(title);
            frame.render_widget(block, area);
        }
    }
}

/// Render the main panel according to the current view.
fn render_main_panel(frame: &mut Frame, app: &App, area: Rect) {
    match app.main_view() {
        MainView::Placeholder => render_placeholder(frame, area),
        MainView::Conversation(id) => conversation::render(frame, app, id, area),
        MainView::Profile => profile::render(frame, app, area),
        MainView::Settings => settings::render(frame, app, area),
    }
}

/// Render the "no chat open" placeholder.
fn render_placeholder(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let paragraph = Paragraph::new("\nSelect a chat to start messaging")
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(block);

    frame.render_widget(paragraph, area);
}
