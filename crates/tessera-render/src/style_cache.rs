#![forbid(unsafe_code)]

//! Memoized SGR prefixes.
//!
//! Most cells on a typical screen carry only text attributes, so the sixteen
//! possible attribute combinations are encoded once when the cache is built.
//! Cells with colors are encoded on demand after downgrading to the cache's
//! [`ColorProfile`].
//!
//! The cache is immutable after construction and owned by each
//! [`Screen`](crate::screen::Screen), so rendering needs only `&self`.

use std::borrow::Cow;

use crate::color::{Color, ColorProfile};
use crate::sgr::style_prefix;
use crate::style::StyleFlags;

/// Precomputed attribute prefixes plus the color profile to render for.
#[derive(Debug, Clone)]
pub struct StyleCache {
    profile: ColorProfile,
    plain: [Box<str>; 16],
}

impl StyleCache {
    #[must_use]
    pub fn new(profile: ColorProfile) -> Self {
        let plain = std::array::from_fn(|bits| {
            let flags = StyleFlags::from_bits_truncate(bits as u8);
            style_prefix(None, None, flags).into_boxed_str()
        });
        Self { profile, plain }
    }

    #[must_use]
    pub const fn profile(&self) -> ColorProfile {
        self.profile
    }

    /// The escape prefix for a cell's style. Empty when nothing is set.
    #[must_use]
    pub fn prefix(&self, fg: Option<Color>, bg: Option<Color>, flags: StyleFlags) -> Cow<'_, str> {
        let fg = fg.and_then(|c| c.downgrade(self.profile));
        let bg = bg.and_then(|c| c.downgrade(self.profile));
        if fg.is_none() && bg.is_none() {
            return Cow::Borrowed(&self.plain[usize::from(flags.bits() & 0x0F)]);
        }
        Cow::Owned(style_prefix(fg, bg, flags))
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new(ColorProfile::default())
    }
}
