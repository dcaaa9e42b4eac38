#![forbid(unsafe_code)]

//! Core: geometry, the key model, and the logging facade shared by every
//! Tessera crate.

pub mod geometry;
pub mod key;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
