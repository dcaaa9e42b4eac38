#![forbid(unsafe_code)]

//! Unicode text metrics for Tessera.
//!
//! Everything here measures display columns on a monospace terminal grid:
//! - [`rune_width`] / [`string_width`] - per-character and additive widths
//! - [`truncate`] / [`truncate_with_ellipsis`] - width-bounded prefixes
//! - [`byte_offset`] / [`visual_column`] - byte/column conversion for cursors
//! - [`prev_char_boundary`] / [`next_char_boundary`] - cursor stepping
//! - [`wrap::wrap_text`] - word wrapping for multi-line widgets
//!
//! # Example
//! ```
//! use tessera_text::{string_width, truncate_with_ellipsis, byte_offset};
//!
//! assert_eq!(string_width("你好"), 4);
//! assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
//! // Column 1 is the second half of a wide character.
//! assert_eq!(byte_offset("你好", 1), 0);
//! ```

pub mod column;
pub mod truncate;
pub mod width;
pub mod wrap;

pub use column::{
    ColumnSpan, byte_offset, display_columns, next_char_boundary, prev_char_boundary,
    visual_column,
};
pub use truncate::{truncate, truncate_with_ellipsis};
pub use width::{has_wide_chars, pad_to_width, rune_width, string_width};
