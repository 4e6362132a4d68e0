//! Thread-local run context for crash reports.
//!
//! Guards use RAII: dropping one restores the context that was active when
//! it was created, so phases and line numbers nest naturally.

use std::cell::RefCell;
use std::fmt;

thread_local! {
    static CURRENT_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

/// Snapshot of what the run was doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunContext {
    pub phase: Option<Phase>,
    /// 1-based line (or record position) being processed
    pub current_line: Option<usize>,
}

impl RunContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_line: None,
        }
    }
}

/// Stages of a prioritization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading and parsing the NDJSON input
    Loading,
    /// Evaluating rules per record
    Scoring,
    /// Sorting scored records
    Ranking,
    /// Writing the JSON array
    Writing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Scoring => write!(f, "scoring"),
            Self::Ranking => write!(f, "ranking"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// Restores the previous context on drop.
pub struct ContextGuard {
    previous: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous;
        });
    }
}

fn update(apply: impl FnOnce(&mut RunContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = *ctx.borrow();
        apply(&mut *ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Enter a phase. The line number is cleared for the new phase.
#[must_use]
pub fn set_phase(phase: Phase) -> ContextGuard {
    update(|ctx| {
        ctx.phase = Some(phase);
        ctx.current_line = None;
    })
}

/// Mark the line currently being processed.
#[must_use]
pub fn set_current_line(line: usize) -> ContextGuard {
    update(|ctx| ctx.current_line = Some(line))
}

/// Called by the panic hook.
#[must_use]
pub fn current_context() -> RunContext {
    CURRENT_CONTEXT.with(|ctx| *ctx.borrow())
}
