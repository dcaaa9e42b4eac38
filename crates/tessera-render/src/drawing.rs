#![forbid(unsafe_code)]

//! Box, line, and shadow drawing on a [`Screen`].
//!
//! Everything here is built on [`Screen::set_cell`] and
//! [`Screen::draw_rune`], so clipping and wide-glyph cleanup come for free.

use tessera_core::geometry::Rect;
use tessera_text::{string_width, truncate_with_ellipsis};

use crate::screen::Screen;
use crate::style::Style;

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Light box-drawing lines.
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Thick lines, used by the brutalist box.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Glyph used for block shadows.
pub const SHADOW_CHAR: char = '█';

impl Screen {
    /// A run of `rune` from `(x, y)` rightwards.
    pub fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, rune: char, style: Style) {
        for cx in x..x.saturating_add(width) {
            self.draw_rune(cx, y, rune, style);
        }
    }

    /// A run of `rune` from `(x, y)` downwards.
    pub fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, rune: char, style: Style) {
        for cy in y..y.saturating_add(height) {
            self.draw_rune(x, cy, rune, style);
        }
    }

    /// Outline `rect` with `chars`. The interior is left untouched.
    pub fn draw_box(&mut self, rect: Rect, chars: BorderChars, style: Style) {
        if rect.is_empty() {
            return;
        }
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        self.draw_horizontal_line(left, top, rect.width, chars.horizontal, style);
        if rect.height > 1 {
            self.draw_horizontal_line(left, bottom, rect.width, chars.horizontal, style);
        }
        if rect.height > 2 {
            self.draw_vertical_line(left, top + 1, rect.height - 2, chars.vertical, style);
            if rect.width > 1 {
                self.draw_vertical_line(right, top + 1, rect.height - 2, chars.vertical, style);
            }
        }

        // Corners last so they win over the edges.
        self.draw_rune(left, top, chars.top_left, style);
        if rect.width > 1 {
            self.draw_rune(right, top, chars.top_right, style);
        }
        if rect.height > 1 {
            self.draw_rune(left, bottom, chars.bottom_left, style);
        }
        if rect.width > 1 && rect.height > 1 {
            self.draw_rune(right, bottom, chars.bottom_right, style);
        }
    }

    /// [`draw_box`](Self::draw_box) with `title` centered in the top edge.
    ///
    /// The title is truncated with an ellipsis to the space between the
    /// corners. Boxes narrower than three columns get no title.
    pub fn draw_box_with_title(
        &mut self,
        rect: Rect,
        chars: BorderChars,
        style: Style,
        title: &str,
        title_style: Style,
    ) {
        self.draw_box(rect, chars, style);
        if rect.width < 3 || rect.height == 0 || title.is_empty() {
            return;
        }
        let available = usize::from(rect.width - 2);
        let title = truncate_with_ellipsis(title, available);
        let offset = (available - string_width(&title)) / 2;
        let start = rect.x + 1 + offset as u16;
        self.draw_string_clipped(start, rect.y, &title, title_style, rect.right() - 1);
    }

    /// Heavy-bordered box with a block shadow one cell right and below.
    pub fn draw_brutalist_box(
        &mut self,
        rect: Rect,
        style: Style,
        title: Option<&str>,
        shadow_style: Style,
    ) {
        self.draw_shadow(rect, shadow_style);
        match title {
            Some(title) => {
                self.draw_box_with_title(rect, BorderChars::HEAVY, style, title, style.bold());
            }
            None => self.draw_box(rect, BorderChars::HEAVY, style),
        }
    }

    /// Block shadow along the right and bottom edges of `rect`, offset by
    /// one cell. Parts that fall off the screen are clipped.
    pub fn draw_shadow(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        let right = rect.right();
        let bottom = rect.bottom();
        self.draw_vertical_line(right, rect.y.saturating_add(1), rect.height, SHADOW_CHAR, style);
        self.draw_horizontal_line(rect.x.saturating_add(1), bottom, rect.width, SHADOW_CHAR, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn plain(screen: &Screen) -> String {
        screen.to_plain_string()
    }

    #[test]
    fn square_box() {
        let mut screen = Screen::new(4, 3);
        screen.draw_box(Rect::new(0, 0, 4, 3), BorderChars::SQUARE, Style::new());
        assert_eq!(plain(&screen), "┌──┐\n│  │\n└──┘");
    }

    #[test]
    fn degenerate_boxes() {
        let mut screen = Screen::new(3, 3);
        screen.draw_box(Rect::new(0, 0, 1, 1), BorderChars::SQUARE, Style::new());
        assert_eq!(screen.row_text(0), "┌  ");

        let mut screen = Screen::new(3, 2);
        screen.draw_box(Rect::new(0, 0, 2, 2), BorderChars::ASCII, Style::new());
        assert_eq!(plain(&screen), "++ \n++ ");

        let mut screen = Screen::new(2, 2);
        screen.draw_box(Rect::new(0, 0, 0, 2), BorderChars::SQUARE, Style::new());
        assert_eq!(plain(&screen), "  \n  ");
    }

    #[test]
    fn box_keeps_interior() {
        let mut screen = Screen::new(5, 3);
        screen.draw_string(0, 1, "xxxxx", Style::new());
        screen.draw_box(Rect::new(0, 0, 5, 3), BorderChars::ROUNDED, Style::new());
        assert_eq!(screen.row_text(1), "│xxx│");
    }

    #[test]
    fn centered_title() {
        let mut screen = Screen::new(10, 3);
        screen.draw_box_with_title(
            Rect::new(0, 0, 10, 3),
            BorderChars::SQUARE,
            Style::new(),
            "Hi",
            Style::new(),
        );
        assert_eq!(screen.row_text(0), "┌───Hi───┐");
    }

    #[test]
    fn long_title_is_truncated() {
        let mut screen = Screen::new(10, 3);
        screen.draw_box_with_title(
            Rect::new(0, 0, 10, 3),
            BorderChars::SQUARE,
            Style::new(),
            "A very long title",
            Style::new(),
        );
        assert_eq!(screen.row_text(0), "┌A ver...┐");
    }

    #[test]
    fn wide_title_fits_between_corners() {
        let mut screen = Screen::new(7, 3);
        screen.draw_box_with_title(
            Rect::new(0, 0, 7, 3),
            BorderChars::SQUARE,
            Style::new(),
            "你好世界",
            Style::new(),
        );
        assert_eq!(screen.row_text(0), "┌你...┐");
    }

    #[test]
    fn brutalist_box_with_shadow() {
        let mut screen = Screen::new(5, 4);
        screen.draw_brutalist_box(
            Rect::new(0, 0, 4, 3),
            Style::new(),
            None,
            Style::new().fg(Color::BRIGHT_BLACK),
        );
        assert_eq!(plain(&screen), "┏━━┓ \n┃  ┃█\n┗━━┛█\n ████");
        assert_eq!(screen.cell_at(4, 1).fg, Some(Color::BRIGHT_BLACK));
    }

    #[test]
    fn shadow_clips_at_screen_edge() {
        let mut screen = Screen::new(3, 2);
        screen.draw_shadow(Rect::new(0, 0, 3, 2), Style::new());
        assert_eq!(plain(&screen), "   \n   ");
    }
}
