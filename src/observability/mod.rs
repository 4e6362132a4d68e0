//! Crash-report context for a prioritization run.
//!
//! The run records which phase it is in and which input line it is on. If
//! anything panics, the hook prints that context so the offending line can
//! be found in the input.
//!
//! ```ignore
//! use assetrank::observability::{install_panic_hook, set_phase, Phase};
//!
//! install_panic_hook();
//! let _phase = set_phase(Phase::Loading);
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{current_context, set_current_line, set_phase, ContextGuard, Phase, RunContext};
pub use panic_hook::install_panic_hook;
