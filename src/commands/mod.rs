//! CLI command implementations.
//!
//! Available commands:
//! - **prioritize**: score `httpx.json` and write `prioritized_assets.json`

pub mod prioritize;

pub use prioritize::{run, RunSummary};
