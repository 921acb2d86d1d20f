use std::time::{Duration, Instant};
use time::OffsetDateTime;

/// How long a resolved call's message stays on screen.
pub const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

/// The server issues no token; any non-empty value marks the user as signed in.
pub const AUTH_TOKEN_PLACEHOLDER: &str = "filled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    TrackPicker,
    CloseConfirm,
    LogoutConfirm,
    Timer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthToken {
    pub token: String,
    pub username: String,
    pub user_id: u64,
    /// Never set by the current server.
    #[allow(dead_code)]
    pub expiration: Option<OffsetDateTime>,
}

impl AuthToken {
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

/// Outcome text of the last resolved call, colour-coded by `is_success`.
#[derive(Debug, Clone, PartialEq)]
pub struct LastMessage {
    pub is_success: bool,
    pub text: String,
    pub shown_at: Instant,
}

impl LastMessage {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) > MESSAGE_LIFETIME
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Empty the input and hand back what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lives_five_seconds() {
        let shown_at = Instant::now();
        let message = LastMessage {
            is_success: true,
            text: "Saved!".to_string(),
            shown_at,
        };
        assert!(!message.is_expired(shown_at + Duration::from_millis(4_900)));
        assert!(!message.is_expired(shown_at + MESSAGE_LIFETIME));
        assert!(message.is_expired(shown_at + Duration::from_millis(5_010)));
    }

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::from_str("wrk");
        input.move_left();
        input.move_left();
        input.insert('o');
        assert_eq!(input.value, "work");
        assert_eq!(input.split_at_cursor(), ("wo", "rk"));

        input.end();
        input.backspace();
        assert_eq!(input.value, "wor");
    }

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut input = TextInput::new();
        input.insert('å');
        input.insert('r');
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_right();
        assert_eq!(input.cursor, 'å'.len_utf8());
        input.backspace();
        assert_eq!(input.value, "r");
    }

    #[test]
    fn take_empties_the_input() {
        let mut input = TextInput::from_str("alice");
        assert_eq!(input.take(), "alice");
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }
}
