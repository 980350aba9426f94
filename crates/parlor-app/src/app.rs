//! Application state machine

use parlor_model::{ChatId, Directory};
use tracing::debug;

use crate::action::AppAction;
use crate::event::AppEvent;
use crate::input::{InputState, KeyInput};
use crate::state::{MainView, Tab};

/// The UI state machine.
///
/// Owns the fixture [`Directory`] and all view state. [`App::handle`] is
/// the single entry point: feed it an [`AppEvent`], execute the returned
/// [`AppAction`]s.
#[derive(Debug)]
pub struct App {
    directory: Directory,
    active_tab: Tab,
    selected_chat: Option<ChatId>,
    list_cursor: usize,
    draft: InputState,
    terminal_size: (u16, u16),
}

impl App {
    /// Create the state machine over the given directory.
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            active_tab: Tab::Chats,
            selected_chat: None,
            list_cursor: 0,
            draft: InputState::new(),
            terminal_size: (80, 24),
        }
    }

    /// Process one event and return the actions the runtime must execute.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![AppAction::Render],
            AppEvent::Resize(w, h) => {
                self.terminal_size = (w, h);
                vec![AppAction::Render]
            }
            AppEvent::Key(key) => {
                if self.conversation_open() {
                    self.handle_conversation_key(key)
                } else {
                    self.handle_browse_key(key)
                }
            }
        }
    }

    /// Whether a conversation is open in the main panel.
    ///
    /// True only on the chats tab with a selected chat; switching tabs
    /// always clears the selection, so the two can never disagree.
    pub fn conversation_open(&self) -> bool {
        self.active_tab == Tab::Chats && self.selected_chat.is_some()
    }

    /// What the main panel should show.
    pub fn main_view(&self) -> MainView {
        match self.active_tab {
            Tab::Profile => MainView::Profile,
            Tab::Settings => MainView::Settings,
            Tab::Chats | Tab::Contacts | Tab::Calls => match self.selected_chat {
                Some(id) if self.active_tab == Tab::Chats => MainView::Conversation(id),
                _ => MainView::Placeholder,
            },
        }
    }

    /// The fixture data set.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The active navigation tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// The selected chat, if any.
    pub fn selected_chat(&self) -> Option<ChatId> {
        self.selected_chat
    }

    /// Cursor position in the list panel.
    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    /// The message draft buffer.
    pub fn draft(&self) -> &InputState {
        &self.draft
    }

    /// Last known terminal size.
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Number of rows in the active tab's list panel.
    pub fn list_len(&self) -> usize {
        match self.active_tab {
            Tab::Chats => self.directory.chats().len(),
            Tab::Contacts => self.directory.contacts().len(),
            Tab::Calls => self.directory.calls().len(),
            Tab::Profile | Tab::Settings => 0,
        }
    }

    fn handle_browse_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char('q') | KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Tab => self.select_tab(self.active_tab.next()),
            KeyInput::BackTab => self.select_tab(self.active_tab.prev()),
            KeyInput::Up | KeyInput::Char('k') => self.move_cursor_up(),
            KeyInput::Down | KeyInput::Char('j') => self.move_cursor_down(),
            KeyInput::Enter => self.open_under_cursor(),
            KeyInput::Char(c) => match Tab::from_digit(c) {
                Some(tab) => self.select_tab(tab),
                None => vec![],
            },
            _ => vec![],
        }
    }

    fn handle_conversation_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Esc => {
                self.selected_chat = None;
                vec![AppAction::Render]
            }
            KeyInput::Tab => self.select_tab(self.active_tab.next()),
            KeyInput::BackTab => self.select_tab(self.active_tab.prev()),
            KeyInput::Enter => self.submit_draft(),
            KeyInput::Char(c) => {
                self.draft.insert(c);
                vec![AppAction::Render]
            }
            KeyInput::Backspace => {
                self.draft.backspace();
                vec![AppAction::Render]
            }
            KeyInput::Delete => {
                self.draft.delete();
                vec![AppAction::Render]
            }
            KeyInput::Left => {
                self.draft.move_left();
                vec![AppAction::Render]
            }
            KeyInput::Right => {
                self.draft.move_right();
                vec![AppAction::Render]
            }
            KeyInput::Home => {
                self.draft.move_home();
                vec![AppAction::Render]
            }
            KeyInput::End => {
                self.draft.move_end();
                vec![AppAction::Render]
            }
            KeyInput::Up | KeyInput::Down => vec![],
        }
    }

    /// Switch tabs. Always drops the chat selection and resets the cursor.
    fn select_tab(&mut self, tab: Tab) -> Vec<AppAction> {
        debug!(?tab, "tab selected");
        self.active_tab = tab;
        self.selected_chat = None;
        self.list_cursor = 0;
        vec![AppAction::Render]
    }

    fn move_cursor_up(&mut self) -> Vec<AppAction> {
        if self.list_cursor > 0 {
            self.list_cursor -= 1;
            vec![AppAction::Render]
        } else {
            vec![]
        }
    }

    fn move_cursor_down(&mut self) -> Vec<AppAction> {
        let len = self.list_len();
        if len > 0 && self.list_cursor < len - 1 {
            self.list_cursor += 1;
            vec![AppAction::Render]
        } else {
            vec![]
        }
    }

    /// Open the chat under the cursor. Only the chats tab opens anything.
    fn open_under_cursor(&mut self) -> Vec<AppAction> {
        if self.active_tab != Tab::Chats {
            return vec![];
        }
        let Some(chat) = self.directory.chats().get(self.list_cursor) else {
            return vec![];
        };
        debug!(chat_id = chat.id, "chat opened");
        self.selected_chat = Some(chat.id);
        vec![AppAction::Render]
    }

    /// Submit the draft. A blank draft is left untouched; otherwise the
    /// buffer is cleared.
    fn submit_draft(&mut self) -> Vec<AppAction> {
        if self.draft.text().trim().is_empty() {
            return vec![];
        }
        let text = self.draft.take();
        debug!(len = text.len(), "draft submitted");
        vec![AppAction::Render]
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Directory::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::default()
    }

    fn key(app: &mut App, k: KeyInput) -> Vec<AppAction> {
        app.handle(AppEvent::Key(k))
    }

    #[test]
    fn starts_on_chats_with_placeholder() {
        let app = app();

        assert_eq!(app.active_tab(), Tab::Chats);
        assert_eq!(app.selected_chat(), None);
        assert_eq!(app.main_view(), MainView::Placeholder);
    }

    #[test]
    fn tick_and_resize_render() {
        let mut app = app();

        assert_eq!(app.handle(AppEvent::Tick), vec![AppAction::Render]);
        assert_eq!(app.handle(AppEvent::Resize(120, 40)), vec![AppAction::Render]);
        assert_eq!(app.terminal_size(), (120, 40));
    }

    #[test]
    fn quit_keys_while_browsing() {
        assert_eq!(key(&mut app(), KeyInput::Char('q')), vec![AppAction::Quit]);
        assert_eq!(key(&mut app(), KeyInput::Esc), vec![AppAction::Quit]);
    }

    #[test]
    fn tab_key_cycles_tabs() {
        let mut app = app();

        key(&mut app, KeyInput::Tab);
        assert_eq!(app.active_tab(), Tab::Contacts);

        key(&mut app, KeyInput::BackTab);
        assert_eq!(app.active_tab(), Tab::Chats);
    }

    #[test]
    fn digits_jump_to_tabs() {
        let mut app = app();

        key(&mut app, KeyInput::Char('4'));
        assert_eq!(app.active_tab(), Tab::Profile);
        assert_eq!(app.main_view(), MainView::Profile);

        key(&mut app, KeyInput::Char('5'));
        assert_eq!(app.main_view(), MainView::Settings);

        key(&mut app, KeyInput::Char('1'));
        assert_eq!(app.active_tab(), Tab::Chats);
    }

    #[test]
    fn cursor_stays_within_list_bounds() {
        let mut app = app();
        let len = app.directory().chats().len();

        assert_eq!(key(&mut app, KeyInput::Up), vec![]);
        assert_eq!(app.list_cursor(), 0);

        for _ in 0..20 {
            key(&mut app, KeyInput::Down);
        }
        assert_eq!(app.list_cursor(), len - 1);

        assert_eq!(key(&mut app, KeyInput::Down), vec![]);
    }

    #[test]
    fn vim_keys_move_the_cursor() {
        let mut app = app();

        key(&mut app, KeyInput::Char('j'));
        assert_eq!(app.list_cursor(), 1);

        key(&mut app, KeyInput::Char('k'));
        assert_eq!(app.list_cursor(), 0);
    }

    #[test]
    fn enter_on_chats_opens_conversation() {
        let mut app = app();

        key(&mut app, KeyInput::Char('j'));
        key(&mut app, KeyInput::Enter);

        assert!(app.conversation_open());
        assert_eq!(app.main_view(), MainView::Conversation(2));
    }

    #[test]
    fn enter_on_contacts_opens_nothing() {
        let mut app = app();

        key(&mut app, KeyInput::Char('2'));
        key(&mut app, KeyInput::Enter);

        assert_eq!(app.selected_chat(), None);
        assert_eq!(app.main_view(), MainView::Placeholder);
    }

    #[test]
    fn tab_switch_clears_selection() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        assert!(app.conversation_open());

        key(&mut app, KeyInput::Tab);
        assert_eq!(app.selected_chat(), None);
        assert_eq!(app.active_tab(), Tab::Contacts);
        assert_eq!(app.main_view(), MainView::Placeholder);
    }

    #[test]
    fn profile_and_settings_ignore_prior_selection() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        key(&mut app, KeyInput::Char('4'));
        assert_eq!(app.main_view(), MainView::Profile);

        key(&mut app, KeyInput::Char('1'));
        key(&mut app, KeyInput::Enter);
        key(&mut app, KeyInput::Char('5'));
        assert_eq!(app.main_view(), MainView::Settings);
    }

    #[test]
    fn esc_in_conversation_backs_out() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        assert!(app.conversation_open());

        key(&mut app, KeyInput::Esc);
        assert!(!app.conversation_open());
        assert_eq!(app.active_tab(), Tab::Chats);
        assert_eq!(app.main_view(), MainView::Placeholder);
    }

    #[test]
    fn typing_in_conversation_edits_draft() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        key(&mut app, KeyInput::Char('h'));
        key(&mut app, KeyInput::Char('i'));
        assert_eq!(app.draft().text(), "hi");

        key(&mut app, KeyInput::Backspace);
        assert_eq!(app.draft().text(), "h");
    }

    #[test]
    fn submit_clears_nonempty_draft() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        key(&mut app, KeyInput::Char('h'));
        key(&mut app, KeyInput::Char('i'));

        assert_eq!(key(&mut app, KeyInput::Enter), vec![AppAction::Render]);
        assert_eq!(app.draft().text(), "");
    }

    #[test]
    fn submit_leaves_blank_draft_untouched() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        assert_eq!(key(&mut app, KeyInput::Enter), vec![]);

        key(&mut app, KeyInput::Char(' '));
        key(&mut app, KeyInput::Char(' '));
        assert_eq!(key(&mut app, KeyInput::Enter), vec![]);
        assert_eq!(app.draft().text(), "  ");
    }

    #[test]
    fn digit_keys_type_into_draft_when_conversation_open() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        key(&mut app, KeyInput::Char('1'));

        assert_eq!(app.active_tab(), Tab::Chats);
        assert_eq!(app.draft().text(), "1");
    }

    #[test]
    fn q_types_into_draft_when_conversation_open() {
        let mut app = app();

        key(&mut app, KeyInput::Enter);
        let actions = key(&mut app, KeyInput::Char('q'));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.draft().text(), "q");
    }

    #[test]
    fn list_len_follows_active_tab() {
        let mut app = app();

        assert_eq!(app.list_len(), 4);
        key(&mut app, KeyInput::Char('2'));
        assert_eq!(app.list_len(), 5);
        key(&mut app, KeyInput::Char('3'));
        assert_eq!(app.list_len(), 3);
        key(&mut app, KeyInput::Char('4'));
        assert_eq!(app.list_len(), 0);
    }
}
