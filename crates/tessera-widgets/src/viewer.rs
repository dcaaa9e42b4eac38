#![forbid(unsafe_code)]

//! Scrollable read-only text.

use tessera_core::geometry::Rect;
use tessera_core::key::{Key, KeyCode};
use tessera_layout::Component;
use tessera_render::{Cell, Screen};
use tessera_style::Theme;
use tessera_text::wrap::{WrapMode, wrap_text};

/// A pager for long text.
///
/// Content is wrapped to the width it is drawn at. Up/down scroll by one
/// line, page up/down by a screen, home/end jump to either end. A
/// `current/total` position indicator is drawn in the bottom-right corner
/// while the content overflows.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    content: String,
    wrap: WrapMode,
    offset: usize,
    /// Wrapped line count and viewport height from the last draw.
    lines: usize,
    page: usize,
    focused: bool,
}

impl Viewer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            page: 1,
            ..Self::default()
        }
    }

    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Replace the content and scroll back to the top.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.offset = 0;
    }

    /// First visible wrapped line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(&self) -> usize {
        self.lines.saturating_sub(self.page)
    }

    fn scroll(&mut self, delta: isize) -> bool {
        let next = self.offset.saturating_add_signed(delta).min(self.max_offset());
        let moved = next != self.offset;
        self.offset = next;
        moved
    }
}

impl Component for Viewer {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Viewer",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let style = theme.text_style();
        screen.fill(area, Cell::BLANK.with_style(style));

        let lines = wrap_text(&self.content, usize::from(area.width), self.wrap);
        self.lines = lines.len();
        self.page = usize::from(area.height);
        self.offset = self.offset.min(self.max_offset());

        for (i, line) in lines.iter().skip(self.offset).take(self.page).enumerate() {
            screen.draw_string_clipped(area.x, area.y + i as u16, line, style, area.right());
        }

        if self.lines > self.page {
            let last = (self.offset + self.page).min(self.lines);
            let indicator = format!("{last}/{}", self.lines);
            let width = indicator.len() as u16;
            if width < area.width {
                let x = area.right() - width;
                screen.draw_string(x, area.bottom() - 1, &indicator, theme.muted_style());
            }
        }
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
        let page = self.page.max(1) as isize;
        match key.code {
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::PageUp => self.scroll(-page),
            KeyCode::PageDown => self.scroll(page),
            KeyCode::Home => self.scroll(isize::MIN),
            KeyCode::End => self.scroll(isize::MAX),
            _ => false,
        }
    }
}
