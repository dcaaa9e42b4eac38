#![forbid(unsafe_code)]

//! Keyboard input model.
//!
//! Components receive a [`Key`]: a closed [`KeyCode`] plus [`Modifiers`].
//! Keys round-trip through their conventional string names
//! (`"up"`, `"ctrl+a"`, `"shift+tab"`, `"x"`) via [`FromStr`] and
//! [`Display`](fmt::Display), so bindings can be written as plain strings.
//!
//! ```
//! use tessera_core::key::{Key, KeyCode, Modifiers};
//!
//! let key: Key = "ctrl+w".parse().unwrap();
//! assert_eq!(key, Key::new(KeyCode::Char('w')).with_modifiers(Modifiers::CTRL));
//! assert_eq!(key.to_string(), "ctrl+w");
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl Key {
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// An unmodified character key.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// `ctrl+<c>`.
    #[must_use]
    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c)).with_modifiers(Modifiers::CTRL)
    }

    /// The character this key would insert into a text field, if any.
    ///
    /// Keys held with ctrl or alt never insert text.
    #[must_use]
    pub fn text(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c)
                if !self.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT)
                    && !c.is_control() =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is(&self, code: KeyCode) -> bool {
        self.code == code && self.modifiers.is_empty()
    }

    #[must_use]
    pub const fn is_ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// The physical or logical key, without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character. Uppercase letters carry no implicit shift.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    /// Shift+Tab as delivered by terminals.
    BackTab,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key F1..=F24.
    F(u8),
}

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0b000;
        const SHIFT = 0b001;
        const ALT   = 0b010;
        const CTRL  = 0b100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

// Canonical name first; every other entry for the same code is an alias.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("esc", KeyCode::Escape),
    ("escape", KeyCode::Escape),
    ("backspace", KeyCode::Backspace),
    ("tab", KeyCode::Tab),
    ("shift+tab", KeyCode::BackTab),
    ("backtab", KeyCode::BackTab),
    ("delete", KeyCode::Delete),
    ("del", KeyCode::Delete),
    ("insert", KeyCode::Insert),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pgup", KeyCode::PageUp),
    ("pageup", KeyCode::PageUp),
    ("pgdown", KeyCode::PageDown),
    ("pagedown", KeyCode::PageDown),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("space", KeyCode::Char(' ')),
];

const MODIFIER_PREFIXES: &[(&str, Modifiers)] = &[
    ("ctrl+", Modifiers::CTRL),
    ("alt+", Modifiers::ALT),
    ("shift+", Modifiers::SHIFT),
];

/// Error returned when a key name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    /// The input was empty.
    Empty,
    /// The key part of the name is not a known key.
    UnknownKey(String),
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty key name"),
            Self::UnknownKey(name) => write!(f, "unknown key name: {name:?}"),
        }
    }
}

impl std::error::Error for ParseKeyError {}

fn parse_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    if let Some(&(_, code)) = NAMED_KEYS.iter().find(|(n, _)| *n == lower) {
        return Some(code);
    }

    let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
    (1..=24).contains(&n).then_some(KeyCode::F(n))
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseKeyError::Empty);
        }

        // A bare single character is always a character key, so "+" works.
        if let Some(code) = parse_code(s).filter(|c| matches!(c, KeyCode::Char(_))) {
            return Ok(Key::new(code));
        }

        // Whole-name aliases that contain a '+' of their own.
        if let Some(&(_, code)) = NAMED_KEYS
            .iter()
            .find(|(n, _)| n.contains('+') && n.eq_ignore_ascii_case(s))
        {
            return Ok(Key::new(code));
        }

        let mut modifiers = Modifiers::NONE;
        let mut rest = s;
        'strip: loop {
            for (prefix, flag) in MODIFIER_PREFIXES {
                let matches = rest.len() > prefix.len()
                    && rest.is_char_boundary(prefix.len())
                    && rest[..prefix.len()].eq_ignore_ascii_case(prefix);
                if matches {
                    modifiers |= *flag;
                    rest = &rest[prefix.len()..];
                    continue 'strip;
                }
            }
            break;
        }

        let code = parse_code(rest).ok_or_else(|| ParseKeyError::UnknownKey(s.to_string()))?;
        if code == KeyCode::Tab && modifiers == Modifiers::SHIFT {
            return Ok(Key::new(KeyCode::BackTab));
        }
        Ok(Key::new(code).with_modifiers(modifiers))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::F(n) => write!(f, "f{n}"),
            code => {
                let name = NAMED_KEYS
                    .iter()
                    .find(|(_, c)| c == code)
                    .map_or("?", |(n, _)| n);
                f.write_str(name)
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (prefix, flag) in MODIFIER_PREFIXES {
            if self.modifiers.contains(*flag) {
                f.write_str(prefix)?;
            }
        }
        match self.code {
            KeyCode::Char(' ') if !self.modifiers.is_empty() => f.write_str("space"),
            code => write!(f, "{code}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(s: &str) -> Key {
        s.parse().unwrap()
    }

    #[test]
    fn named_keys() {
        assert_eq!(parse("up"), Key::new(KeyCode::Up));
        assert_eq!(parse("backspace"), Key::new(KeyCode::Backspace));
        assert_eq!(parse("esc"), Key::new(KeyCode::Escape));
        assert_eq!(parse("Escape"), Key::new(KeyCode::Escape));
        assert_eq!(parse("pgdown"), Key::new(KeyCode::PageDown));
        assert_eq!(parse("f12"), Key::new(KeyCode::F(12)));
    }

    #[test]
    fn modified_keys() {
        assert_eq!(parse("ctrl+a"), Key::ctrl('a'));
        assert_eq!(
            parse("ctrl+alt+left"),
            Key::new(KeyCode::Left).with_modifiers(Modifiers::CTRL | Modifiers::ALT)
        );
        assert_eq!(parse("shift+tab"), Key::new(KeyCode::BackTab));
        assert_eq!(parse("ctrl++"), Key::ctrl('+'));
    }

    #[test]
    fn single_characters_are_literal() {
        assert_eq!(parse("a"), Key::char('a'));
        assert_eq!(parse("A"), Key::char('A'));
        assert_eq!(parse("+"), Key::char('+'));
        assert_eq!(parse(" "), Key::char(' '));
        assert_eq!(parse("é"), Key::char('é'));
    }

    #[test]
    fn unknown_names_fail() {
        assert_eq!("".parse::<Key>(), Err(ParseKeyError::Empty));
        assert!(matches!(
            "hyper+x".parse::<Key>(),
            Err(ParseKeyError::UnknownKey(_))
        ));
        assert!("f25".parse::<Key>().is_err());
        assert!("ctrl+".parse::<Key>().is_err());
    }

    #[test]
    fn canonical_names_round_trip() {
        for name in [
            "up",
            "down",
            "left",
            "right",
            "enter",
            "esc",
            "backspace",
            "tab",
            "shift+tab",
            "delete",
            "insert",
            "home",
            "end",
            "pgup",
            "pgdown",
            "ctrl+a",
            "ctrl+z",
            "alt+x",
            "ctrl+space",
            "shift+up",
            "f1",
            "x",
            "Q",
            "?",
        ] {
            assert_eq!(parse(name).to_string(), name, "{name}");
        }
    }

    #[test]
    fn text_ignores_control_chords() {
        assert_eq!(Key::char('x').text(), Some('x'));
        assert_eq!(Key::ctrl('x').text(), None);
        assert_eq!(Key::new(KeyCode::Enter).text(), None);
    }

    proptest! {
        #[test]
        fn printable_chars_round_trip(c in any::<char>().prop_filter("printable", |c| !c.is_control())) {
            let key = Key::char(c);
            let reparsed: Key = key.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, key);
        }
    }
}
