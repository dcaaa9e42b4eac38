#![forbid(unsafe_code)]

//! Single-line text input.
//!
//! The cursor is a byte offset that always sits on a character boundary,
//! with combining marks kept attached to their base character. The view
//! scrolls horizontally to keep the cursor visible.

use std::borrow::Cow;

use tessera_core::geometry::{Rect, Size};
use tessera_core::key::{Key, KeyCode};
use tessera_layout::Component;
use tessera_render::{Cell, Screen, Style};
use tessera_style::{Interaction, Theme};
use tessera_text::{display_columns, next_char_boundary, prev_char_boundary, rune_width, string_width};
use unicode_segmentation::UnicodeSegmentation;

/// A single-line editable text field.
#[derive(Debug, Clone, Default)]
pub struct Input {
    value: String,
    /// Byte offset into `value`.
    cursor: usize,
    /// First visible display column.
    scroll: usize,
    placeholder: String,
    mask: Option<char>,
    max_length: Option<usize>,
    width: Option<u16>,
    focused: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value and move the cursor to its end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Shown dimmed while the value is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Display every character as `mask`, e.g. for passwords.
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Maximum length in characters.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Preferred width in columns.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Cursor position as a byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_char(&mut self, c: char) {
        if let Some(max) = self.max_length
            && self.value.chars().count() >= max
        {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = prev_char_boundary(&self.value, self.cursor);
        self.value.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        let end = next_char_boundary(&self.value, self.cursor);
        self.value.drain(self.cursor..end);
        true
    }

    /// Delete back to the start of the previous word, along with any
    /// whitespace between it and the cursor.
    fn delete_word_back(&mut self) -> bool {
        let before = &self.value[..self.cursor];
        let start = before
            .split_word_bound_indices()
            .rev()
            .find(|(_, word)| !word.trim().is_empty())
            .map_or(0, |(i, _)| i);
        if start == self.cursor {
            return false;
        }
        self.value.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.value.drain(..self.cursor);
        self.cursor = 0;
        true
    }

    /// The text as displayed, with the mask applied.
    fn display(&self) -> Cow<'_, str> {
        match self.mask {
            Some(mask) => Cow::Owned(std::iter::repeat_n(mask, self.value.chars().count()).collect()),
            None => Cow::Borrowed(&self.value),
        }
    }

    fn cursor_column(&self) -> usize {
        let before = &self.value[..self.cursor];
        match self.mask {
            Some(mask) => before.chars().count() * rune_width(mask),
            None => string_width(before),
        }
    }

    /// Adjust the scroll offset so the cursor column fits in `width`.
    fn scroll_to_cursor(&mut self, width: usize) {
        let column = self.cursor_column();
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + width {
            self.scroll = column + 1 - width;
        }
    }
}

impl Component for Input {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Input",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let field = theme.interactive.style(Interaction::Normal);
        let row = Rect::new(area.x, area.y, area.width, 1);
        screen.fill(row, Cell::BLANK.with_style(field));

        let width = usize::from(area.width);
        self.scroll_to_cursor(width);

        if self.value.is_empty() {
            let style = Style {
                fg: Some(theme.palette.text_subtle),
                ..field
            };
            screen.draw_string_clipped(area.x, area.y, &self.placeholder, style, row.right());
        } else {
            let display = self.display();
            for span in display_columns(&display) {
                if span.width == 0 || span.column < self.scroll {
                    continue;
                }
                let rel = span.column - self.scroll;
                if rel + span.width > width {
                    break;
                }
                screen.draw_rune(area.x + rel as u16, area.y, span.ch, field);
            }
        }

        if self.focused {
            let rel = self.cursor_column() - self.scroll;
            let cursor = Cell::TRANSPARENT.with_style(theme.interactive.style(Interaction::Selected));
            screen.merge_cell(area.x + rel as u16, area.y, &cursor);
        }
    }

    fn intrinsic_size(&self) -> Option<Size> {
        self.width.map(|width| Size::new(width, 1))
    }

    fn can_focus(&self) -> bool {
        true
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        if key.is_ctrl() {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    true
                }
                KeyCode::Char('e') => {
                    self.cursor = self.value.len();
                    true
                }
                KeyCode::Char('u') => self.delete_to_start(),
                KeyCode::Char('w') => self.delete_word_back(),
                _ => false,
            };
        }
        if let Some(c) = key.text() {
            self.insert_char(c);
            return true;
        }
        match key.code {
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                true
            }
            KeyCode::Right => {
                self.cursor = next_char_boundary(&self.value, self.cursor);
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> Input {
        let mut input = Input::new();
        for c in text.chars() {
            input.handle_key(&Key::char(c));
        }
        input
    }

    fn draw(input: &mut Input, width: u16) -> Screen {
        let mut screen = Screen::new(width, 1);
        input.draw(&mut screen, Rect::new(0, 0, width, 1), &Theme::default());
        screen
    }

    #[test]
    fn typing_and_editing() {
        let mut input = typed("helo");
        input.handle_key(&Key::new(KeyCode::Left));
        input.handle_key(&Key::char('l'));
        assert_eq!(input.value(), "hello");
        input.handle_key(&Key::new(KeyCode::Backspace));
        assert_eq!(input.value(), "helo");
        input.handle_key(&Key::new(KeyCode::Delete));
        assert_eq!(input.value(), "hel");
        assert!(!input.handle_key(&Key::new(KeyCode::Delete)));
    }

    #[test]
    fn wide_and_combining_characters_move_as_units() {
        let mut input = typed("a你e\u{301}");
        assert_eq!(input.cursor(), input.value().len());
        input.handle_key(&Key::new(KeyCode::Backspace));
        assert_eq!(input.value(), "a你");
        input.handle_key(&Key::new(KeyCode::Left));
        assert_eq!(input.cursor(), 1);
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn emacs_bindings() {
        let mut input = typed("foo bar  baz");
        assert!(input.handle_key(&Key::ctrl('w')));
        assert_eq!(input.value(), "foo bar  ");
        assert!(input.handle_key(&Key::ctrl('w')));
        assert_eq!(input.value(), "foo ");
        input.handle_key(&Key::ctrl('a'));
        assert_eq!(input.cursor(), 0);
        assert!(!input.handle_key(&Key::ctrl('w')));
        input.handle_key(&Key::ctrl('e'));
        assert!(input.handle_key(&Key::ctrl('u')));
        assert_eq!(input.value(), "");
        assert!(!input.handle_key(&Key::ctrl('z')));
    }

    #[test]
    fn max_length_counts_characters() {
        let mut input = Input::new().with_max_length(3);
        for c in "日本語です".chars() {
            input.handle_key(&Key::char(c));
        }
        assert_eq!(input.value(), "日本語");
    }

    #[test]
    fn placeholder_when_empty() {
        let theme = Theme::default();
        let mut input = Input::new().with_placeholder("search");
        let screen = draw(&mut input, 10);
        assert_eq!(screen.row_text(0), "search    ");
        assert_eq!(screen.cell_at(0, 0).fg, Some(theme.palette.text_subtle));
    }

    #[test]
    fn mask_hides_value() {
        let mut input = Input::new().with_value("secret").with_mask('*');
        assert_eq!(draw(&mut input, 8).row_text(0), "******  ");
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut input = typed("abcdefghij");
        input.focus();
        let screen = draw(&mut input, 5);
        assert_eq!(screen.row_text(0), "ghij ");
        let theme = Theme::default();
        assert_eq!(screen.cell_at(4, 0).bg, Some(theme.interactive.selected.bg));

        input.handle_key(&Key::new(KeyCode::Home));
        assert_eq!(draw(&mut input, 5).row_text(0), "abcde");
    }

    #[test]
    fn cursor_shown_only_when_focused() {
        let theme = Theme::default();
        let mut input = Input::new().with_value("ab");
        input.handle_key(&Key::new(KeyCode::Home));
        assert_eq!(draw(&mut input, 4).cell_at(0, 0).bg, Some(theme.interactive.normal.bg));
        input.focus();
        let screen = draw(&mut input, 4);
        assert_eq!(screen.cell_at(0, 0).bg, Some(theme.interactive.selected.bg));
        assert_eq!(screen.cell_at(0, 0).rune, 'a');
    }
}
