//! Per-asset scoring.
//!
//! Scoring is a pure, total function of a record's `url`, `host`,
//! `status_code` and `tech` fields. It has no errors: a record without any
//! recognizable signal scores zero with no tags.

pub mod rules;

pub use rules::{GroupMode, Predicate, Rule, RuleGroup, RuleSet};

use crate::core::{AssetRecord, ScoreResult};

/// Score a record against the built-in rule tables.
pub fn score(record: &AssetRecord) -> ScoreResult {
    score_with(RuleSet::standard(), record)
}

/// Score a record against an arbitrary rule set.
pub fn score_with(rules: &RuleSet, record: &AssetRecord) -> ScoreResult {
    ScoreResult::new(rules.evaluate(record))
}
