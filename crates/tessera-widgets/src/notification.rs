#![forbid(unsafe_code)]

//! Notification toasts.

use std::fmt;

use tessera_core::geometry::{Rect, Size};
use tessera_layout::Component;
use tessera_render::{Cell, Color, Screen, Style};
use tessera_style::Theme;
use tessera_text::string_width;
use tessera_text::wrap::{WrapMode, wrap_text};

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// The palette color for this level.
    pub const fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Info => theme.palette.info,
            Self::Success => theme.palette.success,
            Self::Warning => theme.palette.warning,
            Self::Error => theme.palette.error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A heavy-bordered message box with a block shadow, colored by level.
///
/// The box sizes itself to its wrapped message and is drawn at the
/// top-left of its area, shrunk if the area is smaller. Place it
/// with a [`Stack`](tessera_layout::Stack) anchor to float it.
#[derive(Debug, Clone)]
pub struct Notification {
    level: Level,
    title: Option<String>,
    message: String,
    max_width: u16,
}

impl Notification {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            title: None,
            message: message.into(),
            max_width: 40,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Replace the level label in the top border.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Wrap the message to keep the box at most this wide.
    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width.max(6);
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or(self.level.label())
    }

    fn lines(&self) -> Vec<String> {
        wrap_text(&self.message, usize::from(self.max_width - 5), WrapMode::WordChar)
    }
}

impl Component for Notification {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Notification",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let Some(size) = self.intrinsic_size() else { return };
        let outer = area.clamp_size(size);
        let boxed = Rect::new(
            outer.x,
            outer.y,
            outer.width.saturating_sub(1),
            outer.height.saturating_sub(1),
        );
        if boxed.is_empty() {
            return;
        }

        let color = self.level.color(theme);
        let surface = Style::new().fg(theme.palette.text).bg(theme.palette.surface);
        screen.fill(boxed, Cell::BLANK.with_style(surface));
        screen.draw_brutalist_box(
            boxed,
            Style::new().fg(color).bg(theme.palette.surface),
            Some(self.title_text()),
            Style::new().fg(theme.palette.overlay),
        );

        let right = boxed.right().saturating_sub(2);
        for (i, line) in self.lines().iter().enumerate() {
            let y = boxed.y + 1 + i as u16;
            if y + 1 >= boxed.bottom() {
                break;
            }
            screen.draw_string_clipped(boxed.x + 2, y, line, surface, right);
        }
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let lines = self.lines();
        let text = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
        let content = text.max(string_width(self.title_text()));
        Some(Size::new(
            u16::try_from(content + 5).unwrap_or(u16::MAX),
            u16::try_from(lines.len() + 3).unwrap_or(u16::MAX),
        ))
    }
}
