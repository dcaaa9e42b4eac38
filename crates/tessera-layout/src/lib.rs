#![forbid(unsafe_code)]

//! Constraint-based layout.
//!
//! Sizes come from [`calculate_constraints`], which turns a list of
//! [`ConstraintSet`]s and an available length into concrete cell counts.
//! The layouts built on it are themselves [`Component`]s, so they nest:
//!
//! - [`Linear`] lines children up along one axis.
//! - [`Split`] divides an area between two panes.
//! - [`Stack`] layers children on top of each other.
//! - [`Conditional`] picks one child by the size it is drawn at.
//!
//! # Example
//!
//! ```
//! use tessera_layout::{Component, Constraint, Empty, Linear, Rect};
//!
//! let column = Linear::vbox()
//!     .spacing(1)
//!     .child(Empty, Constraint::length(3))
//!     .child(Empty, Constraint::ratio(1.0));
//! let rows = column.layout(Rect::new(0, 0, 80, 24));
//! assert_eq!(rows[0].height, 3);
//! assert_eq!(rows[1].y, 4);
//! assert_eq!(rows[1].height, 20);
//! ```

pub mod breakpoints;
pub mod component;
pub mod conditional;
pub mod constraint;
pub mod focus;
pub mod linear;
pub mod split;
pub mod stack;

pub use breakpoints::{
    Breakpoint, Breakpoints, breakpoint_at_least, max_width, min_height, min_width,
};
pub use component::{Component, Empty, Fill};
pub use conditional::{Conditional, Selection};
pub use constraint::{Constraint, ConstraintSet, calculate_constraints};
pub use focus::{FocusGroup, FocusMessage, cycle, dispatch_key};
pub use linear::{Alignment, Direction, Linear};
pub use split::{Split, SplitAreas};
pub use stack::{Anchor, Origin, Placement, Stack};
pub use tessera_core::geometry::{Rect, Sides, Size};
