//! Draft input editing
//!
//! [`InputState`] is a single-line edit buffer with a byte-offset cursor.
//! The cursor always sits on a `char` boundary; every mutation moves it by
//! whole characters so multibyte input cannot split a code point.

/// A key press, abstracted away from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character.
    Char(char),
    /// Enter / Return.
    Enter,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Tab.
    Tab,
    /// Shift-Tab.
    BackTab,
    /// Escape.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
}

/// Single-line edit buffer for the message draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
}

impl InputState {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters, for rendering.
    pub fn cursor_chars(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character under the cursor, if any.
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move the cursor to the start of the buffer.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the buffer.
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Take the buffer contents, leaving the state empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    /// Byte offset of the char boundary before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputState {
        let mut input = InputState::new();
        for c in s.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn insert_appends_at_cursor() {
        let mut input = typed("helo");
        input.move_left();
        input.insert('l');

        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor_chars(), 4);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = typed("abc");
        input.backspace();

        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut input = InputState::new();
        input.backspace();

        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_chars(), 0);
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut input = typed("abc");
        input.move_home();
        input.delete();

        assert_eq!(input.text(), "bc");
        assert_eq!(input.cursor_chars(), 0);
    }

    #[test]
    fn cursor_movement_is_bounded() {
        let mut input = typed("hi");
        input.move_right();
        assert_eq!(input.cursor_chars(), 2);

        input.move_home();
        input.move_left();
        assert_eq!(input.cursor_chars(), 0);
    }

    #[test]
    fn multibyte_editing_stays_on_boundaries() {
        let mut input = typed("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.backspace();

        assert_eq!(input.text(), "hllo");

        input.insert('ø');
        assert_eq!(input.text(), "høllo");
        assert_eq!(input.cursor_chars(), 2);
    }

    #[test]
    fn take_drains_and_resets() {
        let mut input = typed("draft");

        assert_eq!(input.take(), "draft");
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_chars(), 0);
    }
}
