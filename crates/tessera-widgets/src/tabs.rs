#![forbid(unsafe_code)]

//! Tab headers.

use tessera_core::geometry::{Rect, Size};
use tessera_core::key::{Key, KeyCode};
use tessera_layout::Component;
use tessera_render::{Cell, Screen};
use tessera_style::Theme;
use tessera_text::string_width;

/// A row of tab titles with one active tab.
///
/// Left and right switch tabs while focused, wrapping at either end. The
/// active tab uses the theme's active tab colors; a focused tab bar also
/// underlines it.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    titles: Vec<String>,
    active: usize,
    focused: bool,
}

impl Tabs {
    pub fn new(titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            active: 0,
            focused: false,
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Activate tab `index`, if it exists.
    pub fn select(&mut self, index: usize) {
        if index < self.titles.len() {
            self.active = index;
        }
    }

    pub fn next(&mut self) {
        if !self.titles.is_empty() {
            self.active = (self.active + 1) % self.titles.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.titles.is_empty() {
            self.active = (self.active + self.titles.len() - 1) % self.titles.len();
        }
    }
}

impl Component for Tabs {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Tabs",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let row = Rect::new(area.x, area.y, area.width, 1);
        screen.fill(row, Cell::BLANK.with_style(theme.tabs.inactive.style()));

        let mut x = area.x;
        for (i, title) in self.titles.iter().enumerate() {
            if x >= row.right() {
                break;
            }
            let active = i == self.active;
            let mut style = theme.tabs.style(active);
            if active && self.focused {
                style = style.underline();
            }
            let label = format!(" {title} ");
            x = screen.draw_string_clipped(x, area.y, &label, style, row.right());
            x = x.saturating_add(1);
        }
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let width: usize = self.titles.iter().map(|t| string_width(t) + 3).sum();
        Some(Size::new(
            u16::try_from(width.saturating_sub(1)).unwrap_or(u16::MAX),
            1,
        ))
    }

    fn can_focus(&self) -> bool {
        !self.titles.is_empty()
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
        match key.code {
            KeyCode::Left => self.previous(),
            KeyCode::Right => self.next(),
            _ => return false,
        }
        true
    }
}
