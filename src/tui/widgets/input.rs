//! Text input widget
//!
//! A single-line text buffer with a character cursor. Whether an input is
//! focused is decided by the owner (the form cursor), not stored here.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// A simple text input buffer
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    cursor: usize,
    /// Maximum number of characters accepted
    char_limit: Option<usize>,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Limit the number of characters
    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    /// Set content, truncated to the character limit
    pub fn content(mut self, content: impl Into<String>) -> Self {
        let content: String = content.into();
        self.content = match self.char_limit {
            Some(limit) => content.chars().take(limit).collect(),
            None => content,
        };
        self.cursor = self.len();
        self
    }

    /// Number of characters in the buffer
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    ///
    /// Returns false when the character limit is reached.
    pub fn insert(&mut self, c: char) -> bool {
        if self.char_limit.is_some_and(|limit| self.len() >= limit) {
            return false;
        }
        let idx = self.byte_index();
        self.content.insert(idx, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
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
}

/// Renders a [`TextInput`] as `> value`
pub struct TextInputView<'a> {
    input: &'a TextInput,
    focused: bool,
    cursor_visible: bool,
    theme: &'a Theme,
}

impl<'a> TextInputView<'a> {
    pub fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            input,
            focused: false,
            cursor_visible: true,
            theme,
        }
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether the blinking cursor is in its visible phase
    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    fn line(&self) -> Line<'static> {
        let style = if self.focused {
            self.theme.focused()
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled("> ", style)];

        if self.input.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.input.placeholder.clone(),
                self.theme.blurred(),
            ));
            return Line::from(spans);
        }

        if !self.focused {
            spans.push(Span::raw(self.input.value().to_string()));
            return Line::from(spans);
        }

        let chars: Vec<char> = self.input.value().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let under = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars.iter().skip(cursor + 1).collect();

        spans.push(Span::styled(before, style));
        let cursor_style = if self.cursor_visible {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        spans.push(Span::styled(under.to_string(), cursor_style));
        spans.push(Span::styled(after, style));

        if self.input.is_empty() {
            spans.push(Span::styled(
                self.input.placeholder.clone(),
                self.theme.blurred(),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
