#![forbid(unsafe_code)]

//! Tessera public facade crate.
//!
//! Re-exports the types an application needs from the workspace crates and
//! offers a prelude for day-to-day use.
//!
//! ```
//! use tessera::prelude::*;
//!
//! let mut root = Linear::vbox()
//!     .child(Text::new("Tessera"), ConstraintSet::length(1))
//!     .child(StatusBar::new().left("ready"), ConstraintSet::length(1));
//!
//! let mut screen = Screen::new(12, 2);
//! root.draw(&mut screen, Rect::from_size(12, 2), &Theme::default());
//! assert_eq!(screen.row_text(0), "Tessera     ");
//! assert!(screen.row_text(1).starts_with(" ready"));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tessera_core::geometry::{Rect, Sides, Size};
pub use tessera_core::key::{Key, KeyCode, Modifiers, ParseKeyError};

// --- Render re-exports -----------------------------------------------------

pub use tessera_render::{
    BorderChars, Cell, Color, ColorProfile, ParseColorError, Screen, Style, StyleFlags,
};

// --- Style re-exports ------------------------------------------------------

pub use tessera_style::{Palette, PaletteRole, Theme, ThemeBuilder, ThemeError};

// --- Layout re-exports -----------------------------------------------------

pub use tessera_layout::{
    Alignment, Anchor, Breakpoint, Breakpoints, Component, Conditional, Constraint, ConstraintSet,
    Direction, Empty, FocusMessage, Linear, Placement, Split, Stack, dispatch_key,
};

// --- Widget re-exports -----------------------------------------------------

pub use tessera_widgets::{
    Container, Input, Level, Modal, Notification, Row, StatusBar, Table, Tabs, Text, TextArea,
    Viewer,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Tessera apps.
#[derive(Debug)]
pub enum Error {
    /// A key name did not parse.
    Key(ParseKeyError),
    /// A color string did not parse.
    Color(ParseColorError),
    /// Theme lookup or construction failed.
    Theme(ThemeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Theme(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Key(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Theme(err) => Some(err),
        }
    }
}

impl From<ParseKeyError> for Error {
    fn from(err: ParseKeyError) -> Self {
        Self::Key(err)
    }
}

impl From<ParseColorError> for Error {
    fn from(err: ParseColorError) -> Self {
        Self::Color(err)
    }
}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Self::Theme(err)
    }
}

/// Standard result type for Tessera APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Cell, Component, ConstraintSet, Container, Error, Input, Key, KeyCode, Linear, Modal,
        Rect, Result, Screen, Sides, Size, Split, Stack, StatusBar, Style, Table, Text, Theme,
        dispatch_key,
    };

    pub use crate::{core, layout, render, style, text, widgets};
}

pub use tessera_core as core;
pub use tessera_layout as layout;
pub use tessera_render as render;
pub use tessera_style as style;
pub use tessera_text as text;
pub use tessera_widgets as widgets;
