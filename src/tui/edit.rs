/// Single-line input buffer shared by the add and rename flows. The cursor
/// is a character index, converted to a byte offset only at the edit point.
pub struct InputState {
    pub buffer: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn start(&mut self, initial: &str) {
        self.buffer = initial.to_string();
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.buffer.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_index();
            self.buffer.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Buffer split at the cursor, for rendering a block cursor between the
    /// two halves.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.byte_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_move() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('b');
        input.insert_char('c');
        assert_eq!(input.buffer, "abc");
        assert_eq!(input.cursor, 3);

        input.move_cursor_left();
        input.insert_char('x');
        assert_eq!(input.buffer, "abxc");
    }

    #[test]
    fn test_start_places_cursor_at_end() {
        let mut input = InputState::new();
        input.start("hello");
        assert_eq!(input.cursor, 5);

        input.insert_char('!');
        assert_eq!(input.buffer, "hello!");
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut input = InputState::new();
        input.start("abc");
        input.backspace();
        assert_eq!(input.buffer, "ab");

        input.move_cursor_home();
        input.backspace();
        assert_eq!(input.buffer, "ab");
    }

    #[test]
    fn test_delete_removes_at_cursor() {
        let mut input = InputState::new();
        input.start("abc");
        input.delete();
        assert_eq!(input.buffer, "abc");

        input.move_cursor_home();
        input.delete();
        assert_eq!(input.buffer, "bc");
    }

    #[test]
    fn test_multibyte_input() {
        let mut input = InputState::new();
        input.start("héllo");
        assert_eq!(input.cursor, 5);

        input.move_cursor_home();
        input.move_cursor_right();
        input.delete();
        assert_eq!(input.buffer, "hllo");

        input.insert_char('é');
        assert_eq!(input.buffer, "héllo");
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = InputState::new();
        input.start("abcd");
        input.move_cursor_left();
        let (before, after) = input.split_at_cursor();
        assert_eq!(before, "abc");
        assert_eq!(after, "d");
    }
}
