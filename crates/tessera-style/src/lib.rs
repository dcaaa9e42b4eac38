#![forbid(unsafe_code)]

//! Theming for tessera widgets.
//!
//! See [`theme`] for the palette, state tables, and presets.

pub mod theme;

pub use theme::{
    AdaptiveColor, ColorPair, FocusColors, Interaction, InteractiveColors, Palette, PaletteRole,
    TabColors, Theme, ThemeBuilder, ThemeError, themes,
};
