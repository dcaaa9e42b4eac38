#![forbid(unsafe_code)]

//! The cell: one column of one row of the screen.
//!
//! # Invariants
//!
//! - `width == 0` if and only if the cell is the continuation half of a wide
//!   glyph; continuation cells render as nothing.
//! - Any other cell's `width` is the display width of its rune (1 or 2).
//! - `has_content == false` marks a transparent cell: merging it onto another
//!   cell keeps the other cell's glyph.

use tessera_text::rune_width;

use crate::color::Color;
use crate::sgr::{SGR_RESET, style_prefix};
use crate::style::{Style, StyleFlags};
use crate::style_cache::StyleCache;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The glyph. `'\0'` marks an empty or continuation cell.
    pub rune: char,
    /// Display columns: 0 (continuation), 1, or 2.
    pub width: u8,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub flags: StyleFlags,
    /// `false` makes the cell transparent for [`merge`](Self::merge).
    pub has_content: bool,
}

impl Cell {
    /// A blank cell: a space with no colors or attributes.
    pub const BLANK: Self = Self {
        rune: ' ',
        width: 1,
        fg: None,
        bg: None,
        flags: StyleFlags::empty(),
        has_content: true,
    };

    /// The second column of a wide glyph.
    pub const CONTINUATION: Self = Self {
        rune: '\0',
        width: 0,
        fg: None,
        bg: None,
        flags: StyleFlags::empty(),
        has_content: true,
    };

    /// A transparent cell. Merging it onto another cell changes nothing.
    pub const TRANSPARENT: Self = Self {
        rune: '\0',
        width: 1,
        fg: None,
        bg: None,
        flags: StyleFlags::empty(),
        has_content: false,
    };

    /// A cell holding `rune`, with no colors or attributes.
    ///
    /// Control characters become the empty rune. Zero-width marks placed on
    /// their own still occupy one column.
    #[must_use]
    pub fn new(rune: char) -> Self {
        if rune.is_control() {
            return Self {
                rune: '\0',
                ..Self::BLANK
            };
        }
        Self {
            rune,
            width: rune_width(rune).max(1) as u8,
            ..Self::BLANK
        }
    }

    /// Copy colors and bold/italic/underline from `style`.
    ///
    /// The dim flag is left as it was; it is only set through
    /// [`with_dim`](Self::with_dim) or a dimmed region.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.fg = style.fg;
        self.bg = style.bg;
        self.flags = (self.flags & StyleFlags::DIM) | (style.flags - StyleFlags::DIM);
        self
    }

    #[must_use]
    pub const fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub fn with_dim(mut self, dim: bool) -> Self {
        self.flags.set(StyleFlags::DIM, dim);
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }

    /// True for an unstyled blank space.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::BLANK
    }

    /// Composite `overlay` on top of `self`.
    ///
    /// A transparent overlay keeps this cell's glyph, replaces whichever
    /// colors the overlay sets, and adds the overlay's attribute flags. An
    /// overlay with content replaces the cell, except that an unset overlay
    /// background lets this cell's background show through. The overlay's
    /// foreground is used as-is.
    #[must_use]
    pub fn merge(&self, overlay: &Cell) -> Cell {
        if !overlay.has_content {
            return Cell {
                fg: overlay.fg.or(self.fg),
                bg: overlay.bg.or(self.bg),
                flags: self.flags | overlay.flags,
                ..*self
            };
        }
        Cell {
            bg: overlay.bg.or(self.bg),
            ..*overlay
        }
    }

    /// Terminal output for this cell, encoding the style directly.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_glyph(&mut out, |fg, bg, flags| style_prefix(fg, bg, flags).into());
        out
    }

    /// Append this cell's terminal output to `out`, taking prefixes from
    /// `cache`.
    pub fn render_into(&self, out: &mut String, cache: &StyleCache) {
        self.write_glyph(out, |fg, bg, flags| cache.prefix(fg, bg, flags));
    }

    fn write_glyph<'a, F>(&self, out: &mut String, prefix: F)
    where
        F: FnOnce(Option<Color>, Option<Color>, StyleFlags) -> std::borrow::Cow<'a, str>,
    {
        if self.is_continuation() {
            return;
        }
        if self.rune == '\0' {
            out.push(' ');
            return;
        }
        let prefix = prefix(self.fg, self.bg, self.flags);
        if prefix.is_empty() {
            out.push(self.rune);
        } else {
            out.push_str(&prefix);
            out.push(self.rune);
            out.push_str(SGR_RESET);
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
