//! Recoverable, per-line error handling.
//!
//! Fatal errors live in [`crate::core::errors`]; this module only covers
//! input lines that are skipped while the run continues.

pub mod collection;

pub use collection::{LineFailure, LoadResults, SkipReason};
