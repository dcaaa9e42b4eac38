#![forbid(unsafe_code)]

//! Multi-line text editing.
//!
//! ```
//! use tessera_widgets::TextArea;
//!
//! let area = TextArea::new().with_text("Hello\nWorld");
//! assert_eq!(area.line_count(), 2);
//! assert_eq!(area.text(), "Hello\nWorld");
//! ```

use tessera_core::geometry::{Rect, Size};
use tessera_core::key::{Key, KeyCode};
use tessera_layout::Component;
use tessera_render::{Cell, Screen, Style};
use tessera_style::{Interaction, Theme};
use tessera_text::{
    byte_offset, display_columns, next_char_boundary, prev_char_boundary, string_width,
    visual_column,
};

/// Multi-line text editor.
///
/// Up and down keep the column the cursor started from, so moving through a
/// short line does not lose the horizontal position.
#[derive(Debug, Clone)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    /// Byte offset into the current line.
    col: usize,
    /// Column remembered across vertical moves.
    goal_column: Option<usize>,
    scroll_top: usize,
    scroll_left: usize,
    /// Viewport height from the last draw, for paging.
    page: usize,
    placeholder: String,
    height: Option<u16>,
    focused: bool,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            goal_column: None,
            scroll_top: 0,
            scroll_left: 0,
            page: 1,
            placeholder: String::new(),
            height: None,
            focused: false,
        }
    }

    /// Replace the content; the cursor moves to the end.
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Preferred height in rows.
    pub fn with_height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.row = self.lines.len() - 1;
        self.col = self.lines[self.row].len();
        self.goal_column = None;
    }

    /// The content with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// `(row, byte offset in row)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Insert `text` at the cursor. Newlines split lines.
    pub fn insert_str(&mut self, text: &str) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.split_line();
            }
            self.lines[self.row].insert_str(self.col, part);
            self.col += part.len();
        }
        self.goal_column = None;
    }

    fn line(&self) -> &str {
        &self.lines[self.row]
    }

    fn split_line(&mut self) {
        let rest = self.lines[self.row].split_off(self.col);
        self.row += 1;
        self.lines.insert(self.row, rest);
        self.col = 0;
    }

    fn backspace(&mut self) -> bool {
        if self.col > 0 {
            let start = prev_char_boundary(self.line(), self.col);
            self.lines[self.row].drain(start..self.col);
            self.col = start;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].push_str(&line);
        } else {
            return false;
        }
        true
    }

    fn delete(&mut self) -> bool {
        if self.col < self.line().len() {
            let end = next_char_boundary(self.line(), self.col);
            self.lines[self.row].drain(self.col..end);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        } else {
            return false;
        }
        true
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col = prev_char_boundary(self.line(), self.col);
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line().len();
        }
    }

    fn move_right(&mut self) {
        if self.col < self.line().len() {
            self.col = next_char_boundary(self.line(), self.col);
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Move `rows` up (negative) or down, keeping the goal column.
    fn move_vertical(&mut self, rows: isize) {
        let goal = self
            .goal_column
            .unwrap_or_else(|| visual_column(self.line(), self.col));
        let last = self.lines.len() - 1;
        self.row = self.row.saturating_add_signed(rows).min(last);
        self.col = byte_offset(self.line(), goal);
        self.goal_column = Some(goal);
    }

    fn scroll_into_view(&mut self, width: usize, height: usize) {
        if self.row < self.scroll_top {
            self.scroll_top = self.row;
        } else if self.row >= self.scroll_top + height {
            self.scroll_top = self.row + 1 - height;
        }
        let column = visual_column(self.line(), self.col);
        if column < self.scroll_left {
            self.scroll_left = column;
        } else if column >= self.scroll_left + width {
            self.scroll_left = column + 1 - width;
        }
    }
}

impl Component for TextArea {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "TextArea",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let style = theme.interactive.style(Interaction::Normal);
        screen.fill(area, Cell::BLANK.with_style(style));
        let (width, height) = (usize::from(area.width), usize::from(area.height));
        self.page = height;
        self.scroll_into_view(width, height);

        if self.is_empty() {
            let placeholder = Style {
                fg: Some(theme.palette.text_subtle),
                ..style
            };
            screen.draw_string_clipped(area.x, area.y, &self.placeholder, placeholder, area.right());
        } else {
            for (i, line) in self.lines.iter().skip(self.scroll_top).take(height).enumerate() {
                let y = area.y + i as u16;
                for span in display_columns(line) {
                    if span.width == 0 || span.column < self.scroll_left {
                        continue;
                    }
                    let rel = span.column - self.scroll_left;
                    if rel + span.width > width {
                        break;
                    }
                    screen.draw_rune(area.x + rel as u16, y, span.ch, style);
                }
            }
        }

        if self.focused {
            let x = visual_column(self.line(), self.col) - self.scroll_left;
            let y = self.row - self.scroll_top;
            let cursor = Cell::TRANSPARENT.with_style(theme.interactive.style(Interaction::Selected));
            screen.merge_cell(area.x + x as u16, area.y + y as u16, &cursor);
        }
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let height = self.height?;
        let width = self.lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
        Some(Size::new(u16::try_from(width + 1).unwrap_or(u16::MAX), height))
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
        if let Some(c) = key.text() {
            self.lines[self.row].insert(self.col, c);
            self.col += c.len_utf8();
            self.goal_column = None;
            return true;
        }
        let vertical = matches!(
            key.code,
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown
        );
        let page = self.page.max(1) as isize;
        let handled = match key.code {
            KeyCode::Enter => {
                self.split_line();
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Up => {
                self.move_vertical(-1);
                true
            }
            KeyCode::Down => {
                self.move_vertical(1);
                true
            }
            KeyCode::PageUp => {
                self.move_vertical(-page);
                true
            }
            KeyCode::PageDown => {
                self.move_vertical(page);
                true
            }
            KeyCode::Home => {
                self.col = 0;
                true
            }
            KeyCode::End => {
                self.col = self.line().len();
                true
            }
            _ => false,
        };
        if handled && !vertical {
            self.goal_column = None;
        }
        handled
    }
}
