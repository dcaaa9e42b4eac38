#![forbid(unsafe_code)]

//! SGR (Select Graphic Rendition) encoding.
//!
//! A styled cell renders as one combined `ESC [ p1 ; p2 ... m` prefix, the
//! glyph, and [`SGR_RESET`]. Colors map as follows:
//!
//! | Color | Foreground | Background |
//! |-------|------------|------------|
//! | `Reset` | `39` | `49` |
//! | `Indexed(0..=7)` | `30+i` | `40+i` |
//! | `Indexed(8..=15)` | `90+i-8` | `100+i-8` |
//! | `Indexed(16..)` | `38;5;i` | `48;5;i` |
//! | `Rgb(r,g,b)` | `38;2;r;g;b` | `48;2;r;g;b` |

use std::fmt::Write;

use crate::color::Color;
use crate::style::StyleFlags;

/// Reset all attributes.
pub const SGR_RESET: &str = "\x1b[0m";

/// Ordered (flag, SGR code) pairs.
pub const FLAG_TABLE: [(StyleFlags, u8); 4] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
];

/// Accumulates SGR parameters into a single escape sequence.
#[derive(Debug, Default)]
struct Params {
    buf: String,
}

impl Params {
    fn push(&mut self, args: std::fmt::Arguments<'_>) {
        self.buf.push(if self.buf.is_empty() { '[' } else { ';' });
        // Writing into a String cannot fail.
        let _ = self.buf.write_fmt(args);
    }

    fn finish(self) -> String {
        if self.buf.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(self.buf.len() + 2);
        out.push('\x1b');
        out.push_str(&self.buf);
        out.push('m');
        out
    }
}

fn push_color(params: &mut Params, color: Color, background: bool) {
    let base = if background { 10 } else { 0 };
    match color {
        Color::Reset => params.push(format_args!("{}", 39 + base)),
        Color::Indexed(i) if i < 8 => params.push(format_args!("{}", 30 + base + i)),
        Color::Indexed(i) if i < 16 => params.push(format_args!("{}", 90 + base + i - 8)),
        Color::Indexed(i) => params.push(format_args!("{};5;{i}", 38 + base)),
        Color::Rgb(r, g, b) => params.push(format_args!("{};2;{r};{g};{b}", 38 + base)),
    }
}

/// The escape prefix for a style, or an empty string when nothing is set.
///
/// Colors are emitted as given; downgrading happens in the caller.
#[must_use]
pub fn style_prefix(fg: Option<Color>, bg: Option<Color>, flags: StyleFlags) -> String {
    let mut params = Params::default();
    for (flag, code) in FLAG_TABLE {
        if flags.contains(flag) {
            params.push(format_args!("{code}"));
        }
    }
    if let Some(fg) = fg {
        push_color(&mut params, fg, false);
    }
    if let Some(bg) = bg {
        push_color(&mut params, bg, true);
    }
    params.finish()
}
