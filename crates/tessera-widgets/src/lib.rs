#![forbid(unsafe_code)]

//! Widgets for Tessera.
//!
//! Every widget implements [`Component`](tessera_layout::Component), so it
//! can sit anywhere in a layout tree and take part in focus traversal.
//! Widgets read all of their colors from the [`Theme`](tessera_style::Theme)
//! passed to `draw`; none of them hold colors of their own.
//!
//! | Widget | Focusable | Keys |
//! |--------|-----------|------|
//! | [`Input`] | yes | editing, ctrl+a/e/u/w |
//! | [`TextArea`] | yes | editing, arrows, paging |
//! | [`Table`] | yes | row selection |
//! | [`Tabs`] | yes | left/right |
//! | [`Viewer`] | yes | scrolling |
//! | [`Modal`] | while open | escape/enter close |
//! | [`Container`] | if its child is | forwarded |
//! | [`Text`], [`StatusBar`], [`Notification`] | no | none |
//!
//! With the `tracing` feature each widget's `draw` runs inside a
//! `widget_render` debug span carrying the widget name and its area.

pub mod container;
pub mod input;
pub mod modal;
pub mod notification;
pub mod status_bar;
pub mod table;
pub mod tabs;
pub mod text;
pub mod textarea;
pub mod viewer;

pub use container::Container;
pub use input::Input;
pub use modal::Modal;
pub use notification::{Level, Notification};
pub use status_bar::StatusBar;
pub use table::{Row, Table, TableState};
pub use tabs::Tabs;
pub use text::Text;
pub use textarea::TextArea;
pub use viewer::Viewer;
