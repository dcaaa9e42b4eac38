#![forbid(unsafe_code)]

//! Width tiers and ready-made predicates for [`Conditional`](crate::Conditional).
//!
//! | Tier | Default min width |
//! |------|-------------------|
//! | `Xs` | 0                 |
//! | `Sm` | 60                |
//! | `Md` | 90                |
//! | `Lg` | 120               |
//! | `Xl` | 160               |

use std::fmt;

/// A terminal width tier, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum widths for each tier above `Xs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Breakpoints {
    pub const DEFAULT: Self = Self {
        sm: 60,
        md: 90,
        lg: 120,
        xl: 160,
    };

    /// Thresholds are raised where needed so they never decrease.
    #[must_use]
    pub const fn new(sm: u16, md: u16, lg: u16, xl: u16) -> Self {
        let md = if md < sm { sm } else { md };
        let lg = if lg < md { md } else { lg };
        let xl = if xl < lg { lg } else { xl };
        Self { sm, md, lg, xl }
    }

    #[must_use]
    pub const fn classify(self, width: u16) -> Breakpoint {
        if width >= self.xl {
            Breakpoint::Xl
        } else if width >= self.lg {
            Breakpoint::Lg
        } else if width >= self.md {
            Breakpoint::Md
        } else if width >= self.sm {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }

    #[must_use]
    pub const fn threshold(self, tier: Breakpoint) -> u16 {
        match tier {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    #[must_use]
    pub fn at_least(self, width: u16, tier: Breakpoint) -> bool {
        self.classify(width) >= tier
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn between(self, width: u16, min: Breakpoint, max: Breakpoint) -> bool {
        (min..=max).contains(&self.classify(width))
    }
}

/// Matches when the width is at least `cols`.
pub fn min_width(cols: u16) -> impl Fn(u16, u16) -> bool + 'static {
    move |width, _| width >= cols
}

/// Matches when the width is at most `cols`.
pub fn max_width(cols: u16) -> impl Fn(u16, u16) -> bool + 'static {
    move |width, _| width <= cols
}

/// Matches when the height is at least `rows`.
pub fn min_height(rows: u16) -> impl Fn(u16, u16) -> bool + 'static {
    move |_, height| height >= rows
}

/// Matches widths in `tier` or above under the default thresholds.
pub fn breakpoint_at_least(tier: Breakpoint) -> impl Fn(u16, u16) -> bool + 'static {
    move |width, _| Breakpoints::DEFAULT.at_least(width, tier)
}
