//! Per-line outcome collection for the loader.
//!
//! Every input line is handled independently. Instead of stopping at the
//! first bad line, we keep BOTH the records that parsed and the lines that
//! were skipped, so callers can report or assert on them.

use crate::core::RecordError;
use std::fmt;

/// Results from loading a newline-delimited input.
#[derive(Debug, Clone)]
pub struct LoadResults<T> {
    pub successes: Vec<T>,
    pub failures: Vec<LineFailure>,
}

impl<T> Default for LoadResults<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl<T> LoadResults<T> {
    pub fn new(successes: Vec<T>, failures: Vec<LineFailure>) -> Self {
        Self {
            successes,
            failures,
        }
    }

    /// Fold one line's outcome into the collection.
    pub fn push(&mut self, line_number: usize, outcome: Result<T, SkipReason>) {
        match outcome {
            Ok(item) => self.successes.push(item),
            Err(reason) => self.failures.push(LineFailure::new(line_number, reason)),
        }
    }

    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn total_count(&self) -> usize {
        self.success_count() + self.failure_count()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Skipped lines that carried content, i.e. excluding blank ones.
    pub fn malformed_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| f.reason != SkipReason::Blank)
            .count()
    }
}

/// A line that did not yield a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number in the input
    pub line_number: usize,
    pub reason: SkipReason,
}

impl LineFailure {
    pub fn new(line_number: usize, reason: SkipReason) -> Self {
        Self {
            line_number,
            reason,
        }
    }
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.reason)
    }
}

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    InvalidJson(String),
    Record(RecordError),
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::InvalidJson(_) => "invalid_json",
            Self::Record(RecordError::NotAnObject) => "not_an_object",
            Self::Record(RecordError::InvalidField { .. }) => "invalid_field",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "blank line"),
            Self::InvalidJson(msg) => write!(f, "invalid JSON ({msg})"),
            Self::Record(err) => write!(f, "{err}"),
        }
    }
}

impl From<RecordError> for SkipReason {
    fn from(err: RecordError) -> Self {
        Self::Record(err)
    }
}
