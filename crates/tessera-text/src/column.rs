#![forbid(unsafe_code)]

//! Conversions between byte offsets and display columns.
//!
//! Zero-width characters (combining marks, joiners) stay attached to the
//! character before them: none of these functions ever return an offset that
//! sits between a base character and its marks.

use crate::width::rune_width;

/// A character's position on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    /// Byte offset of the character.
    pub byte: usize,
    /// First column the character occupies.
    pub column: usize,
    /// Columns occupied (0, 1, or 2).
    pub width: usize,
    pub ch: char,
}

/// Iterate characters with their byte offset and starting column.
pub fn display_columns(s: &str) -> impl Iterator<Item = ColumnSpan> + '_ {
    let mut column = 0;
    s.char_indices().map(move |(byte, ch)| {
        let width = rune_width(ch);
        let span = ColumnSpan {
            byte,
            column,
            width,
            ch,
        };
        column += width;
        span
    })
}

/// Byte offset of the character displayed at `column`.
///
/// A column in the second half of a wide character resolves to that
/// character's first byte. Columns at or past the end return `s.len()`.
#[must_use]
pub fn byte_offset(s: &str, column: usize) -> usize {
    display_columns(s)
        .find(|span| span.width > 0 && column < span.column + span.width)
        .map_or(s.len(), |span| span.byte)
}

/// Column at which the character containing `byte` starts.
///
/// Offsets past the end clamp to the full width; offsets inside a multi-byte
/// character snap back to its start.
#[must_use]
pub fn visual_column(s: &str, byte: usize) -> usize {
    let mut end = byte.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].chars().map(rune_width).sum()
}

/// Start of the character before `byte`, skipping back over any zero-width
/// marks so the result lands on a base character. Returns 0 at the start.
#[must_use]
pub fn prev_char_boundary(s: &str, byte: usize) -> usize {
    let mut pos = byte.min(s.len());
    while !s.is_char_boundary(pos) {
        pos -= 1;
    }
    for (idx, ch) in s[..pos].char_indices().rev() {
        if rune_width(ch) > 0 || idx == 0 {
            return idx;
        }
    }
    0
}

/// End of the character at `byte`, including any zero-width marks that
/// follow it. Returns `s.len()` at the end.
#[must_use]
pub fn next_char_boundary(s: &str, byte: usize) -> usize {
    if byte >= s.len() {
        return s.len();
    }
    let mut pos = byte;
    while !s.is_char_boundary(pos) {
        pos += 1;
    }
    for (offset, ch) in s[pos..].char_indices().skip(1) {
        if rune_width(ch) > 0 {
            return pos + offset;
        }
    }
    s.len()
}
