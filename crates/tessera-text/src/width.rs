#![forbid(unsafe_code)]

//! Per-character display width.
//!
//! Widths are measured per `char` and summed, so `string_width` is additive
//! over concatenation. Grapheme clusters such as ZWJ emoji families therefore
//! measure as the sum of their visible parts; the cell grid stores one `char`
//! per cell and agrees with this model.

use unicode_width::UnicodeWidthChar;

/// Code points that never occupy a column even when the width table says
/// otherwise (soft hyphen, bidi controls, variation selectors).
#[inline]
fn is_zero_width_codepoint(c: char) -> bool {
    let u = c as u32;
    matches!(u, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF)
        || matches!(u, 0xFE00..=0xFE0F | 0xFE20..=0xFE2F | 0xE0100..=0xE01EF)
        || matches!(
            u,
            0x00AD | 0x034F | 0x180E | 0x200B..=0x200F | 0x2060 | 0xFEFF
        )
        || matches!(u, 0x202A..=0x202E | 0x2066..=0x206F)
}

/// Pictographic blocks that terminals draw two columns wide even where the
/// East Asian Width property is neutral.
#[inline]
fn is_emoji_block(c: char) -> bool {
    matches!(c as u32, 0x1F000..=0x1F02F | 0x1F0A0..=0x1F0FF | 0x1F300..=0x1FAFF)
}

/// Display width of a single character: 0, 1, or 2.
///
/// Control characters and combining marks are 0; East Asian wide and
/// fullwidth characters and emoji are 2.
#[inline]
#[must_use]
pub fn rune_width(c: char) -> usize {
    if c.is_ascii() {
        return usize::from(matches!(c, ' '..='~'));
    }
    if c.is_control() || is_zero_width_codepoint(c) {
        return 0;
    }
    if is_emoji_block(c) {
        return 2;
    }
    c.width().unwrap_or(0).min(2)
}

/// Display width of a string: the sum of its characters' widths.
#[must_use]
pub fn string_width(s: &str) -> usize {
    if s.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return s.len();
    }
    s.chars().map(rune_width).sum()
}

/// True if any character is two columns wide.
#[must_use]
pub fn has_wide_chars(s: &str) -> bool {
    !s.is_ascii() && s.chars().any(|c| rune_width(c) == 2)
}

/// Right-pad with spaces to `width` columns. Longer strings are returned
/// unchanged.
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = string_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(current));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths() {
        assert_eq!(rune_width('a'), 1);
        assert_eq!(rune_width(' '), 1);
        assert_eq!(rune_width('\t'), 0);
        assert_eq!(rune_width('\n'), 0);
        assert_eq!(rune_width('\x1b'), 0);
        assert_eq!(rune_width('\x7f'), 0);
    }

    #[test]
    fn wide_and_zero_width() {
        assert_eq!(rune_width('你'), 2);
        assert_eq!(rune_width('Ａ'), 2);
        assert_eq!(rune_width('ｱ'), 1);
        assert_eq!(rune_width('🚀'), 2);
        assert_eq!(rune_width('\u{0301}'), 0);
        assert_eq!(rune_width('\u{200D}'), 0);
        assert_eq!(rune_width('\u{FE0F}'), 0);
        assert_eq!(rune_width('\u{00AD}'), 0);
        assert_eq!(rune_width('\u{0085}'), 0);
    }

    #[test]
    fn string_widths() {
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("你好"), 4);
        assert_eq!(string_width("🚀"), 2);
        assert_eq!(string_width("café"), 4);
        assert_eq!(string_width("cafe\u{0301}"), 4);
        assert_eq!(string_width("a\tb"), 2);
    }

    #[test]
    fn wide_detection() {
        assert!(!has_wide_chars("plain"));
        assert!(!has_wide_chars("café"));
        assert!(has_wide_chars("ok 你"));
    }

    #[test]
    fn padding() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("你", 3), "你 ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }
}
