//! Text input widget
//!
//! A single-line text field with a cursor. Only the form's date and amount
//! fields use it, and both accept ASCII only, so the cursor is a byte index.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as `label: value`, with a block cursor when focused
    pub fn to_line(&self, label: &str, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![Span::styled(format!("{:>10}: ", label), label_style)];

        if !focused {
            let (text, style) = if self.content.is_empty() {
                (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
            } else {
                (self.content.clone(), Style::default().fg(Color::Yellow))
            };
            spans.push(Span::styled(text, style));
            return Line::from(spans);
        }

        let value_style = Style::default().fg(Color::White);
        let cursor_pos = self.cursor.min(self.content.len());
        let (before, after) = self.content.split_at(cursor_pos);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');

        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(rest.as_str().to_string(), value_style));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut input = TextInput::new();
        for c in "2024".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "2024");

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "204");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "04");

        input.move_end();
        input.insert('5');
        assert_eq!(input.value(), "045");
    }

    #[test]
    fn test_set_content_moves_cursor() {
        let mut input = TextInput::new();
        input.set_content("12.50");
        assert_eq!(input.cursor, 5);
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let input = TextInput::new().placeholder("YYYY-MM-DD");
        let line = input.to_line("Date", false);
        assert!(line.spans.iter().any(|s| s.content == "YYYY-MM-DD"));
    }
}
