#![forbid(unsafe_code)]

//! Colors, terminal color profiles, and downgrade utilities.
//!
//! A cell stores `Option<Color>`: `None` means "no color set" and emits
//! nothing, while [`Color::Reset`] explicitly selects the terminal default.

use std::fmt;
use std::str::FromStr;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's default color (SGR 39/49).
    Reset,
    /// A palette index. 0..=15 are the ANSI colors, 16..=255 the extended
    /// palette.
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);
    pub const BRIGHT_BLACK: Self = Self::Indexed(8);
    pub const BRIGHT_RED: Self = Self::Indexed(9);
    pub const BRIGHT_GREEN: Self = Self::Indexed(10);
    pub const BRIGHT_YELLOW: Self = Self::Indexed(11);
    pub const BRIGHT_BLUE: Self = Self::Indexed(12);
    pub const BRIGHT_MAGENTA: Self = Self::Indexed(13);
    pub const BRIGHT_CYAN: Self = Self::Indexed(14);
    pub const BRIGHT_WHITE: Self = Self::Indexed(15);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let bad = || ParseColorError(hex.to_string());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
        match digits.len() {
            6 => Ok(Self::Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::Rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(bad()),
        }
    }

    /// Approximate RGB value, used for downgrading and luminance.
    #[must_use]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Reset => (0, 0, 0),
            Self::Indexed(i) => ansi256_to_rgb(i),
            Self::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// Convert to the richest color the profile can display.
    ///
    /// Returns `None` for [`ColorProfile::Mono`]: no color is emitted at all.
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> Option<Self> {
        match (profile, self) {
            (ColorProfile::Mono, _) => None,
            (_, Self::Reset) | (ColorProfile::TrueColor, _) => Some(self),
            (ColorProfile::Ansi256, Self::Indexed(_)) => Some(self),
            (ColorProfile::Ansi256, Self::Rgb(r, g, b)) => Some(Self::Indexed(rgb_to_256(r, g, b))),
            (ColorProfile::Ansi16, Self::Indexed(i)) if i < 16 => Some(self),
            (ColorProfile::Ansi16, color) => {
                let (r, g, b) = color.to_rgb();
                Some(Self::Indexed(rgb_to_ansi16(r, g, b)))
            }
        }
    }
}

const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("yellow", Color::YELLOW),
    ("blue", Color::BLUE),
    ("magenta", Color::MAGENTA),
    ("cyan", Color::CYAN),
    ("white", Color::WHITE),
    ("gray", Color::BRIGHT_BLACK),
    ("bright-red", Color::BRIGHT_RED),
    ("bright-green", Color::BRIGHT_GREEN),
    ("bright-yellow", Color::BRIGHT_YELLOW),
    ("bright-blue", Color::BRIGHT_BLUE),
    ("bright-magenta", Color::BRIGHT_MAGENTA),
    ("bright-cyan", Color::BRIGHT_CYAN),
    ("bright-white", Color::BRIGHT_WHITE),
];

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts hex (`#ff8800`), palette indices (`"208"`), `"reset"`, and
    /// the sixteen ANSI color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        if trimmed.eq_ignore_ascii_case("reset") || trimmed.eq_ignore_ascii_case("default") {
            return Ok(Self::Reset);
        }
        if let Ok(index) = trimmed.parse::<u8>() {
            return Ok(Self::Indexed(index));
        }
        NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
            .map(|(_, color)| *color)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// A string that is not a recognizable color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

/// Terminal color capability used for downgrade decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorProfile {
    /// No color output; text attributes only.
    Mono,
    /// The 16 ANSI colors.
    Ansi16,
    /// The 256-color palette.
    Ansi256,
    /// 24-bit color.
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Choose the best available profile from detection flags.
    ///
    /// `no_color` reflects explicit user intent (`NO_COLOR`) and wins.
    #[must_use]
    pub const fn from_flags(true_color: bool, colors_256: bool, no_color: bool) -> Self {
        if no_color {
            Self::Mono
        } else if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::Ansi256
        } else {
            Self::Ansi16
        }
    }

    /// Detect from `NO_COLOR`, `COLORTERM`, and `TERM`.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name| std::env::var(name).ok();
        Self::from_env_values(
            var("NO_COLOR").as_deref(),
            var("COLORTERM").as_deref(),
            var("TERM").as_deref(),
        )
    }

    /// Detection logic behind [`from_env`](Self::from_env), taking the
    /// variable values directly.
    #[must_use]
    pub fn from_env_values(
        no_color: Option<&str>,
        colorterm: Option<&str>,
        term: Option<&str>,
    ) -> Self {
        let no_color = no_color.is_some_and(|v| !v.is_empty());
        let true_color = colorterm.is_some_and(|v| {
            v.eq_ignore_ascii_case("truecolor") || v.eq_ignore_ascii_case("24bit")
        });
        let colors_256 = term.is_some_and(|t| t.contains("256color"));
        Self::from_flags(true_color, colors_256, no_color)
    }
}

const ANSI16_PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Nearest index in the 256-color palette (cube or gray ramp).
#[must_use]
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r - 8) / 10).min(23);
    }
    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

// Cube levels are [0, 95, 135, 175, 215, 255]; bins split at the midpoints.
fn cube_index(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 115 {
        1
    } else {
        (v - 35) / 40
    }
}

/// RGB value of a 256-color palette index.
#[must_use]
pub fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    if index < 16 {
        return ANSI16_PALETTE[index as usize];
    }
    if index >= 232 {
        let gray = 8 + 10 * (index - 232);
        return (gray, gray, gray);
    }
    let idx = index - 16;
    (
        LEVELS[(idx / 36) as usize],
        LEVELS[((idx / 6) % 6) as usize],
        LEVELS[(idx % 6) as usize],
    )
}

/// Nearest of the 16 ANSI colors by luminance-weighted distance.
#[must_use]
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let distance = |(pr, pg, pb): (u8, u8, u8)| {
        let dr = i64::from(r) - i64::from(pr);
        let dg = i64::from(g) - i64::from(pg);
        let db = i64::from(b) - i64::from(pb);
        2126 * dr * dr + 7152 * dg * dg + 722 * db * db
    };
    ANSI16_PALETTE
        .iter()
        .enumerate()
        .min_by_key(|(_, rgb)| distance(**rgb))
        .map_or(0, |(idx, _)| idx as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#ff8800"), Ok(Color::Rgb(255, 136, 0)));
        assert_eq!(Color::from_hex("0a0B0c"), Ok(Color::Rgb(10, 11, 12)));
        assert_eq!(Color::from_hex("#fff"), Ok(Color::Rgb(255, 255, 255)));
        assert!(Color::from_hex("#ff88").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ü00").is_err());
    }

    #[test]
    fn from_str_variants() {
        assert_eq!("reset".parse(), Ok(Color::Reset));
        assert_eq!("208".parse(), Ok(Color::Indexed(208)));
        assert_eq!("Bright-Blue".parse(), Ok(Color::BRIGHT_BLUE));
        assert_eq!("#000000".parse(), Ok(Color::Rgb(0, 0, 0)));
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn profile_from_flags_prefers_no_color() {
        assert_eq!(ColorProfile::from_flags(true, true, true), ColorProfile::Mono);
        assert_eq!(ColorProfile::from_flags(true, false, false), ColorProfile::TrueColor);
        assert_eq!(ColorProfile::from_flags(false, true, false), ColorProfile::Ansi256);
        assert_eq!(ColorProfile::from_flags(false, false, false), ColorProfile::Ansi16);
    }

    #[test]
    fn profile_from_env_values() {
        assert_eq!(
            ColorProfile::from_env_values(Some("1"), Some("truecolor"), None),
            ColorProfile::Mono
        );
        // An empty NO_COLOR does not disable color.
        assert_eq!(
            ColorProfile::from_env_values(Some(""), Some("24bit"), None),
            ColorProfile::TrueColor
        );
        assert_eq!(
            ColorProfile::from_env_values(None, None, Some("xterm-256color")),
            ColorProfile::Ansi256
        );
        assert_eq!(
            ColorProfile::from_env_values(None, None, Some("vt100")),
            ColorProfile::Ansi16
        );
    }

    #[test]
    fn downgrade_paths() {
        let orange = Color::Rgb(255, 135, 0);
        assert_eq!(orange.downgrade(ColorProfile::TrueColor), Some(orange));
        assert_eq!(orange.downgrade(ColorProfile::Ansi256), Some(Color::Indexed(208)));
        assert_eq!(orange.downgrade(ColorProfile::Mono), None);
        assert_eq!(Color::RED.downgrade(ColorProfile::Ansi16), Some(Color::RED));
        assert_eq!(Color::Reset.downgrade(ColorProfile::Ansi16), Some(Color::Reset));
        assert_eq!(
            Color::Rgb(250, 0, 0).downgrade(ColorProfile::Ansi16),
            Some(Color::BRIGHT_RED)
        );
    }

    #[test]
    fn gray_ramp() {
        assert_eq!(rgb_to_256(0, 0, 0), 16);
        assert_eq!(rgb_to_256(255, 255, 255), 231);
        assert_eq!(rgb_to_256(128, 128, 128), 244);
        assert_eq!(ansi256_to_rgb(244), (128, 128, 128));
    }
}
