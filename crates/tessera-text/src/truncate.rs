#![forbid(unsafe_code)]

//! Width-bounded truncation.

use std::borrow::Cow;

use crate::width::{rune_width, string_width};

const ELLIPSIS: &str = "...";

/// Longest prefix of `s` whose display width is at most `max_width`.
///
/// Never splits a character. A wide character that would straddle the limit
/// is dropped whole; zero-width marks following the last kept character are
/// kept with it.
#[must_use]
pub fn truncate(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        width += rune_width(ch);
        if width > max_width {
            return &s[..idx];
        }
    }
    s
}

/// Truncate to `max_width`, ending with `"..."` when anything was cut.
///
/// Strings that already fit are returned as-is. With `max_width <= 3`
/// there is no room for the ellipsis and plain truncation is used.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    if string_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    let ellipsis_width = ELLIPSIS.len();
    if max_width <= ellipsis_width {
        return Cow::Borrowed(truncate(s, max_width));
    }
    let mut out = truncate(s, max_width - ellipsis_width).to_string();
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}
