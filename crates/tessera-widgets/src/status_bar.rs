#![forbid(unsafe_code)]

//! One-row status bar.

use tessera_core::geometry::{Rect, Size};
use tessera_layout::Component;
use tessera_render::{Cell, Screen, Style};
use tessera_style::Theme;
use tessera_text::{string_width, truncate_with_ellipsis};

const SEPARATOR: &str = " │ ";

/// Left- and right-aligned segments on the surface color.
///
/// Segments on each side are joined with a thin separator. When both sides
/// do not fit, the left side keeps its space and the right side is
/// truncated.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    left: Vec<String>,
    right: Vec<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, segment: impl Into<String>) -> Self {
        self.left.push(segment.into());
        self
    }

    pub fn right(mut self, segment: impl Into<String>) -> Self {
        self.right.push(segment.into());
        self
    }

    pub fn set_left(&mut self, segments: impl IntoIterator<Item = impl Into<String>>) {
        self.left = segments.into_iter().map(Into::into).collect();
    }

    pub fn set_right(&mut self, segments: impl IntoIterator<Item = impl Into<String>>) {
        self.right = segments.into_iter().map(Into::into).collect();
    }
}

impl Component for StatusBar {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "StatusBar",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let style = Style::new().fg(theme.palette.text).bg(theme.palette.surface);
        let row = Rect::new(area.x, area.y, area.width, 1);
        screen.fill(row, Cell::BLANK.with_style(style));

        let left = format!(" {}", self.left.join(SEPARATOR));
        let end = screen.draw_string_clipped(area.x, area.y, &left, style, row.right());

        if self.right.is_empty() {
            return;
        }
        let right = format!("{} ", self.right.join(SEPARATOR));
        let room = usize::from(row.right().saturating_sub(end.saturating_add(1)));
        let right = truncate_with_ellipsis(&right, room);
        let x = row.right() - string_width(&right) as u16;
        screen.draw_string_clipped(x, area.y, &right, theme.muted_style().bg(theme.palette.surface), row.right());
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let width = string_width(&self.left.join(SEPARATOR)) + string_width(&self.right.join(SEPARATOR)) + 3;
        Some(Size::new(u16::try_from(width).unwrap_or(u16::MAX), 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(bar: &mut StatusBar, width: u16) -> String {
        let mut screen = Screen::new(width, 1);
        bar.draw(&mut screen, Rect::new(0, 0, width, 1), &Theme::default());
        screen.row_text(0)
    }

    #[test]
    fn segments_on_both_sides() {
        let mut bar = StatusBar::new().left("NORMAL").left("main.rs").right("42:7");
        assert_eq!(draw(&mut bar, 26), " NORMAL │ main.rs    42:7 ");
    }

    #[test]
    fn right_side_truncates_first() {
        let mut bar = StatusBar::new().left("edit").right("utf-8").right("unix");
        assert_eq!(draw(&mut bar, 14), " edit utf-8...");
        assert_eq!(draw(&mut bar, 6), " edit ");
    }

    #[test]
    fn paints_surface_background() {
        let theme = Theme::default();
        let mut bar = StatusBar::new();
        let mut screen = Screen::new(3, 1);
        bar.draw(&mut screen, Rect::new(0, 0, 3, 1), &theme);
        assert_eq!(screen.cell_at(2, 0).bg, Some(theme.palette.surface));
        assert_eq!(bar.intrinsic_size(), Some(Size::new(3, 1)));
    }
}
