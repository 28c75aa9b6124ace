//! The diagnostics facade for the filtrace command-line tools.
//!
//! Four message categories (error, warning, debug, progress) plus a
//! single-line ASCII [progress meter](Diagnostics::progress_meter), written
//! to one output sink. Debug and progress output is gated by the display
//! flags in the `default.parameters` file, which is resolved lazily on the
//! first gated call (with a write-defaults-and-retry recovery step when the
//! file is missing or unreadable).
//!
//! The facade never terminates the process itself: fatal errors and
//! usage-requested exits are returned as [`ExitRequest`] values that the
//! top-level driver maps to `process::exit`.

#![warn(missing_docs)]

pub mod exit;
pub mod facade;
mod gate;
mod macros;
mod meter;

pub use exit::ExitRequest;
pub use facade::{Diagnostics, UsageSource};
pub use gate::DisplayFlags;
