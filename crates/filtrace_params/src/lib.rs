//! Parsing and writing of `default.parameters` files.
//!
//! This crate reads the process-wide parameters file and produces a
//! strongly-typed [`Params`] value. It also writes a fresh defaults file,
//! which the diagnostics layer uses as its recovery step when the file is
//! missing or unreadable.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ParamsError;
pub use loader::{load_params, load_params_from_str, write_default_params, PARAMS_FILE_NAME};
pub use types::{OutputParams, Params, TraceParams};
