// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod priority;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AssetRecord, Error, RecordError, Result, RuleMatch, ScoreResult, ScoredAsset, SignalKind,
};

pub use crate::errors::{LineFailure, LoadResults, SkipReason};

pub use crate::io::{load_assets, parse_assets, parse_line, write_prioritized, JsonWriter};

pub use crate::priority::{prioritize, prioritize_with, PrioritizedAssets};

pub use crate::scoring::{score, score_with, GroupMode, Predicate, Rule, RuleGroup, RuleSet};

pub use crate::config::{RunConfig, INPUT_FILE_NAME, OUTPUT_FILE_NAME};
