#![forbid(unsafe_code)]

//! Static text label.

use tessera_core::geometry::{Rect, Size};
use tessera_layout::{Alignment, Component};
use tessera_render::{Screen, Style};
use tessera_style::Theme;
use tessera_text::string_width;
use tessera_text::wrap::{WrapMode, wrap_text};

/// Read-only text, optionally wrapped and aligned.
///
/// Without an explicit style the theme's text colors are used.
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    style: Option<Style>,
    align: Alignment,
    wrap: WrapMode,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: None,
            align: Alignment::Start,
            wrap: WrapMode::None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Horizontal alignment of each line. `Stretch` behaves like `Start`.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl Component for Text {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Text",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let style = self.style.unwrap_or_else(|| theme.text_style());
        let lines = wrap_text(&self.content, usize::from(area.width), self.wrap);
        for (i, line) in lines.iter().take(usize::from(area.height)).enumerate() {
            let width = string_width(line).min(usize::from(area.width)) as u16;
            let offset = self.align.offset(width, area.width);
            screen.draw_string_clipped(area.x + offset, area.y + i as u16, line, style, area.right());
        }
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let (width, height) = self
            .content
            .split('\n')
            .fold((0, 0), |(w, h), line| (w.max(string_width(line)), h + 1));
        Some(Size::new(
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        ))
    }
}
