//! Render tests for the widget tree.
//!
//! Draws the full UI into a [`TestBackend`] buffer and asserts on the
//! visible text, so layout regressions show up without a real terminal.

use parlor_app::{App, AppEvent, KeyInput};
use parlor_tui::ui;
use ratatui::{Terminal, backend::TestBackend};

fn draw(app: &App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| ui::render(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, keys: &[KeyInput]) {
    for &key in keys {
        app.handle(AppEvent::Key(key));
    }
}

#[test]
fn chats_tab_renders_every_thread() {
    let app = App::default();
    let screen = draw(&app);

    for name in ["Anna Ivanova", "Project Team", "Max", "Mom"] {
        assert!(screen.contains(name), "missing chat {name}:\n{screen}");
    }
    assert!(screen.contains("(2)"));
    assert!(screen.contains("(5)"));
    assert!(screen.contains("Search..."));
    assert!(screen.contains("Select a chat to start messaging"));
}

#[test]
fn nav_rail_lists_all_tabs() {
    let app = App::default();
    let screen = draw(&app);

    for label in ["1 Chats", "2 Contacts", "3 Calls", "4 Profile", "5 Settings"] {
        assert!(screen.contains(label), "missing tab {label}:\n{screen}");
    }
}

#[test]
fn contacts_tab_renders_every_contact() {
    let mut app = App::default();
    press(&mut app, &[KeyInput::Char('2')]);
    let screen = draw(&app);

    for name in ["Anna Ivanova", "Max", "Sergey Petrov", "Elena", "Mom"] {
        assert!(screen.contains(name), "missing contact {name}:\n{screen}");
    }
    assert!(screen.contains("Last seen 2 hours ago"));
}

#[test]
fn calls_tab_renders_history() {
    let mut app = App::default();
    press(&mut app, &[KeyInput::Char('3')]);
    let screen = draw(&app);

    assert!(screen.contains("video"));
    assert!(screen.contains("audio"));
    assert!(screen.contains("45:00"));
    assert!(screen.contains("Yesterday, 18:30"));
}

#[test]
fn conversation_shows_transcript_and_prompt() {
    let mut app = App::default();
    press(&mut app, &[KeyInput::Enter]);
    let screen = draw(&app);

    assert!(screen.contains("Hi! How are you?"));
    assert!(screen.contains("Great! Working on a new project"));
    assert!(screen.contains("Sounds interesting!"));
    assert!(screen.contains("you: "));
    assert!(screen.contains("> "));
    assert!(!screen.contains("Select a chat to start messaging"));
}

#[test]
fn conversation_echoes_the_draft() {
    let mut app = App::default();
    press(&mut app, &[KeyInput::Enter]);
    press(&mut app, &[KeyInput::Char('h'), KeyInput::Char('e'), KeyInput::Char('y')]);
    let screen = draw(&app);

    assert!(screen.contains("> hey"));
}

#[test]
fn profile_tab_renders_the_card() {
    let mut app = App::default();
    press(&mut app, &[KeyInput::Char('4')]);
    let screen = draw(&app);

    assert!(screen.contains("Ivan Petrov"));
    assert!(screen.contains("@ivan_petrov"));
    assert!(screen.contains("ivan@example.com"));
    assert!(screen.contains("January 15, 2024"));
}

#[test]
fn settings_tab_renders_every_row() {
    let mut app = App::default();
    press(&mut app, &[KeyInput::Char('5')]);
    let screen = draw(&app);

    for title in ["Notifications", "Privacy", "Appearance", "Language", "Storage", "Security"] {
        assert!(screen.contains(title), "missing setting {title}:\n{screen}");
    }
    assert!(screen.contains("Two-factor authentication"));
}

#[test]
fn status_bar_shows_unread_total_and_hints() {
    let mut app = App::default();
    let screen = draw(&app);
    assert!(screen.contains("Unread: 7"));
    assert!(screen.contains("q: quit"));

    press(&mut app, &[KeyInput::Enter]);
    let screen = draw(&app);
    assert!(screen.contains("Esc: back"));
}

#[test]
fn switching_back_from_profile_restores_the_list() {
    let mut app = App::default();
    press(&mut app, &[KeyInput::Char('4'), KeyInput::Char('1')]);
    let screen = draw(&app);

    assert!(screen.contains("Anna Ivanova"));
    assert!(screen.contains("Select a chat to start messaging"));
}
