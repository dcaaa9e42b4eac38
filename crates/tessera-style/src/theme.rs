#![forbid(unsafe_code)]

//! Themes: a palette of semantic color roles plus per-state color tables.
//!
//! A [`Theme`] is a read-only value. Widgets look up colors through it and
//! never mutate it; switching themes means handing widgets a different
//! value.
//!
//! # Example
//! ```
//! use tessera_style::theme::{PaletteRole, Theme};
//! use tessera_render::Color;
//!
//! let theme = Theme::by_name("nord").unwrap();
//! let text = theme.palette.get(PaletteRole::Text);
//!
//! let custom = Theme::builder()
//!     .text(Color::rgb(200, 200, 200))
//!     .background(Color::rgb(20, 20, 20))
//!     .build();
//! assert_eq!(custom.palette.text, Color::rgb(200, 200, 200));
//! # let _ = text;
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use tessera_render::{Color, ParseColorError, Style};

/// A color that can change with light/dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveColor {
    Fixed(Color),
    Adaptive { light: Color, dark: Color },
}

impl AdaptiveColor {
    #[inline]
    pub const fn fixed(color: Color) -> Self {
        Self::Fixed(color)
    }

    #[inline]
    pub const fn adaptive(light: Color, dark: Color) -> Self {
        Self::Adaptive { light, dark }
    }

    #[inline]
    pub const fn resolve(&self, is_dark: bool) -> Color {
        match self {
            Self::Fixed(c) => *c,
            Self::Adaptive { light, dark } => {
                if is_dark {
                    *dark
                } else {
                    *light
                }
            }
        }
    }

    #[inline]
    pub const fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }
}

impl From<Color> for AdaptiveColor {
    fn from(color: Color) -> Self {
        Self::Fixed(color)
    }
}

/// Errors from theme lookup and construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No preset with this name.
    UnknownTheme(String),
    /// No palette role with this name.
    UnknownRole(String),
    /// A color string for `role` failed to parse.
    InvalidColor {
        role: PaletteRole,
        source: ParseColorError,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme(name) => {
                write!(f, "unknown theme {name:?} (expected one of: ")?;
                write!(f, "{})", themes::NAMES.join(", "))
            }
            Self::UnknownRole(name) => write!(f, "unknown palette role {name:?}"),
            Self::InvalidColor { role, source } => {
                write!(f, "invalid color for {role}: {source}")
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

macro_rules! palette_roles {
    ($($variant:ident => $field:ident, $name:literal;)+) => {
        /// Semantic color slots of a [`Palette`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PaletteRole {
            $($variant,)+
        }

        impl PaletteRole {
            pub const ALL: &'static [PaletteRole] = &[$(PaletteRole::$variant,)+];

            /// Kebab-case name, as accepted by [`FromStr`].
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(PaletteRole::$variant => $name,)+
                }
            }
        }

        /// The base colors of a theme.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct Palette {
            $(pub $field: Color,)+
        }

        impl Palette {
            #[must_use]
            pub const fn get(&self, role: PaletteRole) -> Color {
                match role {
                    $(PaletteRole::$variant => self.$field,)+
                }
            }

            pub fn set(&mut self, role: PaletteRole, color: Color) {
                match role {
                    $(PaletteRole::$variant => self.$field = color,)+
                }
            }
        }
    };
}

palette_roles! {
    Primary => primary, "primary";
    Secondary => secondary, "secondary";
    Accent => accent, "accent";
    Background => background, "background";
    Surface => surface, "surface";
    Overlay => overlay, "overlay";
    Text => text, "text";
    TextMuted => text_muted, "text-muted";
    TextSubtle => text_subtle, "text-subtle";
    Success => success, "success";
    Warning => warning, "warning";
    Error => error, "error";
    Info => info, "info";
    Border => border, "border";
    SelectionBg => selection_bg, "selection-bg";
    SelectionFg => selection_fg, "selection-fg";
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.name() == wanted)
            .ok_or_else(|| ThemeError::UnknownRole(s.to_string()))
    }
}

/// A color pair that depends on whether the owner has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusColors {
    pub focused: Color,
    pub unfocused: Color,
}

impl FocusColors {
    #[inline]
    #[must_use]
    pub const fn pick(&self, focused: bool) -> Color {
        if focused { self.focused } else { self.unfocused }
    }
}

/// Foreground and background for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }
}

/// Tab header colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabColors {
    pub active: ColorPair,
    pub inactive: ColorPair,
}

impl TabColors {
    #[must_use]
    pub const fn style(&self, active: bool) -> Style {
        if active {
            self.active.style().bold()
        } else {
            self.inactive.style()
        }
    }
}

/// Interaction state of a selectable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interaction {
    #[default]
    Normal,
    Hover,
    Selected,
    Disabled,
}

/// Colors for interactive elements (rows, list items, buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveColors {
    pub normal: ColorPair,
    pub hover: ColorPair,
    pub selected: ColorPair,
    pub disabled: ColorPair,
}

impl InteractiveColors {
    #[must_use]
    pub const fn get(&self, state: Interaction) -> ColorPair {
        match state {
            Interaction::Normal => self.normal,
            Interaction::Hover => self.hover,
            Interaction::Selected => self.selected,
            Interaction::Disabled => self.disabled,
        }
    }

    #[must_use]
    pub const fn style(&self, state: Interaction) -> Style {
        self.get(state).style()
    }
}

/// A complete theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
    pub border: FocusColors,
    pub title: FocusColors,
    pub tabs: TabColors,
    pub interactive: InteractiveColors,
}

impl Default for Theme {
    fn default() -> Self {
        themes::dark()
    }
}

impl Theme {
    /// A theme whose state tables are derived from `palette`.
    #[must_use]
    pub fn from_palette(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
            border: FocusColors {
                focused: palette.primary,
                unfocused: palette.border,
            },
            title: FocusColors {
                focused: palette.primary,
                unfocused: palette.text_muted,
            },
            tabs: TabColors {
                active: ColorPair::new(palette.background, palette.primary),
                inactive: ColorPair::new(palette.text_muted, palette.surface),
            },
            interactive: InteractiveColors {
                normal: ColorPair::new(palette.text, palette.surface),
                hover: ColorPair::new(palette.text, palette.overlay),
                selected: ColorPair::new(palette.selection_fg, palette.selection_bg),
                disabled: ColorPair::new(palette.text_subtle, palette.surface),
            },
        }
    }

    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Look up a preset by name. Case-insensitive.
    pub fn by_name(name: &str) -> Result<Self, ThemeError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" | "default" => Ok(themes::dark()),
            "light" => Ok(themes::light()),
            "nord" => Ok(themes::nord()),
            "gruvbox" => Ok(themes::gruvbox()),
            "brutalist" => Ok(themes::brutalist()),
            _ => Err(ThemeError::UnknownTheme(name.to_string())),
        }
    }

    /// The preset matching the terminal background: [`themes::dark`] or
    /// [`themes::light`].
    #[must_use]
    pub fn detect() -> Self {
        if Self::detect_dark_mode() {
            themes::dark()
        } else {
            themes::light()
        }
    }

    /// Guess whether the terminal has a dark background.
    ///
    /// Reads `COLORFGBG` (`"fg;bg"`); background index 7 or 15 means light.
    /// Anything else, including an unset or malformed variable, means dark.
    #[must_use]
    pub fn detect_dark_mode() -> bool {
        Self::detect_dark_mode_from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    fn detect_dark_mode_from_colorfgbg(colorfgbg: Option<&str>) -> bool {
        if let Some(colorfgbg) = colorfgbg
            && let Some(bg_part) = colorfgbg.split(';').next_back()
            && let Ok(bg) = bg_part.trim().parse::<u8>()
        {
            return bg != 7 && bg != 15;
        }
        true
    }

    /// Plain text on the theme background.
    #[must_use]
    pub const fn text_style(&self) -> Style {
        Style::new().fg(self.palette.text).bg(self.palette.background)
    }

    #[must_use]
    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.palette.text_muted)
    }

    #[must_use]
    pub const fn border_style(&self, focused: bool) -> Style {
        Style::new().fg(self.border.pick(focused))
    }

    #[must_use]
    pub const fn title_style(&self, focused: bool) -> Style {
        let style = Style::new().fg(self.title.pick(focused));
        if focused { style.bold() } else { style }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s)
    }
}

/// Builder for custom themes.
///
/// Palette colors may be [`AdaptiveColor`]s; they are resolved against the
/// builder's dark-mode flag in [`build`](Self::build). State tables are
/// derived from the final palette unless set explicitly.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    name: String,
    base: Palette,
    is_dark: bool,
    overrides: Vec<(PaletteRole, AdaptiveColor)>,
    border: Option<FocusColors>,
    title: Option<FocusColors>,
    tabs: Option<TabColors>,
    interactive: Option<InteractiveColors>,
}

impl ThemeBuilder {
    /// Start from the dark preset.
    pub fn new() -> Self {
        Self::from_theme(themes::dark())
    }

    /// Start from `theme`'s palette. Its state tables are kept only if the
    /// palette is left unchanged.
    pub fn from_theme(theme: Theme) -> Self {
        Self {
            name: theme.name,
            base: theme.palette,
            is_dark: true,
            overrides: Vec::new(),
            border: Some(theme.border),
            title: Some(theme.title),
            tabs: Some(theme.tabs),
            interactive: Some(theme.interactive),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mode used to resolve adaptive colors. Defaults to dark.
    pub fn dark_mode(mut self, is_dark: bool) -> Self {
        self.is_dark = is_dark;
        self
    }

    pub fn color(mut self, role: PaletteRole, color: impl Into<AdaptiveColor>) -> Self {
        self.overrides.push((role, color.into()));
        self.border = None;
        self.title = None;
        self.tabs = None;
        self.interactive = None;
        self
    }

    /// Set a palette color from its string form (`"#rrggbb"`, a name, or an
    /// index).
    pub fn color_str(self, role: PaletteRole, value: &str) -> Result<Self, ThemeError> {
        let color = value
            .parse::<Color>()
            .map_err(|source| ThemeError::InvalidColor { role, source })?;
        Ok(self.color(role, color))
    }

    pub fn primary(self, color: impl Into<AdaptiveColor>) -> Self {
        self.color(PaletteRole::Primary, color)
    }

    pub fn accent(self, color: impl Into<AdaptiveColor>) -> Self {
        self.color(PaletteRole::Accent, color)
    }

    pub fn background(self, color: impl Into<AdaptiveColor>) -> Self {
        self.color(PaletteRole::Background, color)
    }

    pub fn surface(self, color: impl Into<AdaptiveColor>) -> Self {
        self.color(PaletteRole::Surface, color)
    }

    pub fn text(self, color: impl Into<AdaptiveColor>) -> Self {
        self.color(PaletteRole::Text, color)
    }

    pub fn border(self, color: impl Into<AdaptiveColor>) -> Self {
        self.color(PaletteRole::Border, color)
    }

    /// Override the border table instead of deriving it.
    pub fn border_colors(mut self, colors: FocusColors) -> Self {
        self.border = Some(colors);
        self
    }

    pub fn title_colors(mut self, colors: FocusColors) -> Self {
        self.title = Some(colors);
        self
    }

    pub fn tab_colors(mut self, colors: TabColors) -> Self {
        self.tabs = Some(colors);
        self
    }

    pub fn interactive_colors(mut self, colors: InteractiveColors) -> Self {
        self.interactive = Some(colors);
        self
    }

    pub fn build(self) -> Theme {
        let mut palette = self.base;
        for (role, color) in &self.overrides {
            palette.set(*role, color.resolve(self.is_dark));
        }
        let derived = Theme::from_palette(self.name, palette);
        Theme {
            border: self.border.unwrap_or(derived.border),
            title: self.title.unwrap_or(derived.title),
            tabs: self.tabs.unwrap_or(derived.tabs),
            interactive: self.interactive.unwrap_or(derived.interactive),
            ..derived
        }
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in presets.
pub mod themes {
    use super::*;

    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: &[&str] = &["dark", "light", "nord", "gruvbox", "brutalist"];

    #[must_use]
    pub fn dark() -> Theme {
        Theme::from_palette(
            "dark",
            Palette {
                primary: Color::rgb(88, 166, 255),
                secondary: Color::rgb(163, 113, 247),
                accent: Color::rgb(255, 123, 114),
                background: Color::rgb(22, 27, 34),
                surface: Color::rgb(33, 38, 45),
                overlay: Color::rgb(48, 54, 61),
                text: Color::rgb(230, 237, 243),
                text_muted: Color::rgb(139, 148, 158),
                text_subtle: Color::rgb(110, 118, 129),
                success: Color::rgb(63, 185, 80),
                warning: Color::rgb(210, 153, 34),
                error: Color::rgb(248, 81, 73),
                info: Color::rgb(88, 166, 255),
                border: Color::rgb(48, 54, 61),
                selection_bg: Color::rgb(56, 139, 253),
                selection_fg: Color::rgb(255, 255, 255),
            },
        )
    }

    #[must_use]
    pub fn light() -> Theme {
        Theme::from_palette(
            "light",
            Palette {
                primary: Color::rgb(9, 105, 218),
                secondary: Color::rgb(130, 80, 223),
                accent: Color::rgb(207, 34, 46),
                background: Color::rgb(255, 255, 255),
                surface: Color::rgb(246, 248, 250),
                overlay: Color::rgb(234, 238, 242),
                text: Color::rgb(31, 35, 40),
                text_muted: Color::rgb(87, 96, 106),
                text_subtle: Color::rgb(140, 149, 159),
                success: Color::rgb(26, 127, 55),
                warning: Color::rgb(158, 106, 3),
                error: Color::rgb(207, 34, 46),
                info: Color::rgb(9, 105, 218),
                border: Color::rgb(208, 215, 222),
                selection_bg: Color::rgb(221, 244, 255),
                selection_fg: Color::rgb(31, 35, 40),
            },
        )
    }

    /// Nord, dark variant.
    #[must_use]
    pub fn nord() -> Theme {
        Theme::from_palette(
            "nord",
            Palette {
                primary: Color::rgb(136, 192, 208),
                secondary: Color::rgb(180, 142, 173),
                accent: Color::rgb(191, 97, 106),
                background: Color::rgb(46, 52, 64),
                surface: Color::rgb(59, 66, 82),
                overlay: Color::rgb(67, 76, 94),
                text: Color::rgb(236, 239, 244),
                text_muted: Color::rgb(216, 222, 233),
                text_subtle: Color::rgb(129, 161, 193),
                success: Color::rgb(163, 190, 140),
                warning: Color::rgb(235, 203, 139),
                error: Color::rgb(191, 97, 106),
                info: Color::rgb(129, 161, 193),
                border: Color::rgb(76, 86, 106),
                selection_bg: Color::rgb(76, 86, 106),
                selection_fg: Color::rgb(236, 239, 244),
            },
        )
    }

    /// Gruvbox, dark variant.
    #[must_use]
    pub fn gruvbox() -> Theme {
        Theme::from_palette(
            "gruvbox",
            Palette {
                primary: Color::rgb(250, 189, 47),
                secondary: Color::rgb(211, 134, 155),
                accent: Color::rgb(254, 128, 25),
                background: Color::rgb(40, 40, 40),
                surface: Color::rgb(60, 56, 54),
                overlay: Color::rgb(80, 73, 69),
                text: Color::rgb(235, 219, 178),
                text_muted: Color::rgb(189, 174, 147),
                text_subtle: Color::rgb(146, 131, 116),
                success: Color::rgb(184, 187, 38),
                warning: Color::rgb(250, 189, 47),
                error: Color::rgb(251, 73, 52),
                info: Color::rgb(131, 165, 152),
                border: Color::rgb(102, 92, 84),
                selection_bg: Color::rgb(80, 73, 69),
                selection_fg: Color::rgb(251, 241, 199),
            },
        )
    }

    /// High-contrast ANSI colors, meant for heavy borders and block shadows.
    #[must_use]
    pub fn brutalist() -> Theme {
        let palette = Palette {
            primary: Color::BRIGHT_YELLOW,
            secondary: Color::BRIGHT_MAGENTA,
            accent: Color::BRIGHT_RED,
            background: Color::BLACK,
            surface: Color::BLACK,
            overlay: Color::BRIGHT_BLACK,
            text: Color::BRIGHT_WHITE,
            text_muted: Color::WHITE,
            text_subtle: Color::BRIGHT_BLACK,
            success: Color::BRIGHT_GREEN,
            warning: Color::BRIGHT_YELLOW,
            error: Color::BRIGHT_RED,
            info: Color::BRIGHT_CYAN,
            border: Color::BRIGHT_WHITE,
            selection_bg: Color::BRIGHT_YELLOW,
            selection_fg: Color::BLACK,
        };
        Theme {
            tabs: TabColors {
                active: ColorPair::new(Color::BLACK, Color::BRIGHT_YELLOW),
                inactive: ColorPair::new(Color::BRIGHT_WHITE, Color::BLACK),
            },
            ..Theme::from_palette("brutalist", palette)
        }
    }

    /// Every preset, in [`NAMES`] order.
    #[must_use]
    pub fn all() -> Vec<Theme> {
        vec![dark(), light(), nord(), gruvbox(), brutalist()]
    }
}
