#![forbid(unsafe_code)]

//! Style descriptors applied to cells when drawing.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text attribute flags stored on each cell.
    ///
    /// The four flags give sixteen combinations; [`StyleCache`] precomputes
    /// the SGR prefix of each one.
    ///
    /// [`StyleCache`]: crate::style_cache::StyleCache
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0001;
        /// Dim / decreased intensity ("faint").
        const DIM       = 0b0010;
        const ITALIC    = 0b0100;
        const UNDERLINE = 0b1000;
    }
}

/// Foreground, background, and text attributes for a draw call.
///
/// Unset colors (`None`) leave the terminal color untouched. `Style` has no
/// dim builder: dimming is applied to regions after drawing, see
/// [`Screen::dim_area`](crate::screen::Screen::dim_area).
///
/// ```
/// use tessera_render::{Color, Style};
///
/// let style = Style::new().fg(Color::CYAN).bold();
/// assert_eq!(style.fg, Some(Color::CYAN));
/// assert!(style.is_bold());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub flags: StyleFlags,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::BOLD);
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::ITALIC);
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::UNDERLINE);
        self
    }

    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.flags.contains(StyleFlags::BOLD)
    }

    /// Layer `other` on top: its set colors replace ours, flags accumulate.
    #[must_use]
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            flags: self.flags | other.flags,
        }
    }

    /// True when drawing with this style emits no escape sequences.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }
}
