#![forbid(unsafe_code)]

//! Render kernel: cells, colors, the screen grid, and SGR output.
//!
//! A [`Screen`] is a fixed-size grid of [`Cell`]s addressed in `u16`
//! columns and rows. Widgets draw into it through the `draw_*` family; the
//! host prints [`Screen::render`] once per frame.

pub mod cell;
pub mod color;
pub mod drawing;
pub mod screen;
pub mod sgr;
pub mod style;
pub mod style_cache;

pub use cell::Cell;
pub use color::{Color, ColorProfile, ParseColorError};
pub use drawing::BorderChars;
pub use screen::Screen;
pub use style::{Style, StyleFlags};
pub use style_cache::StyleCache;
