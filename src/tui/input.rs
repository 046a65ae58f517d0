//! Input field handling for the terminal user interface.

/// A single-line text input with cursor position and active state.
///
/// The cursor is a character index, not a byte index, so editing stays
/// valid for multi-byte input.
#[derive(Clone)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            active: false,
        }
    }

    /// Create an input field with initial text value, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            active: false,
        }
    }

    /// Byte offset of the given character index.
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Number of characters in the field.
    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut field = InputField::with_value("abc");
        field.move_cursor_left();
        field.handle_char('x');
        assert_eq!(field.value, "abxc");

        field.handle_backspace();
        assert_eq!(field.value, "abc");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn multibyte_input_keeps_boundaries() {
        let mut field = InputField::new();
        for c in "héllo".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.value, "héllo");

        field.move_cursor_left();
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_backspace(); // removes 'é'
        assert_eq!(field.value, "hllo");
    }

    #[test]
    fn delete_removes_under_cursor_and_stops_at_end() {
        let mut field = InputField::with_value("ab");
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value, "a");

        field.handle_delete(); // cursor at end, no-op
        assert_eq!(field.value, "a");
    }
}
