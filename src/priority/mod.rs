//! Ranking of scored assets.
//!
//! Every record is scored independently, then the whole collection is
//! sorted by score, highest first. The sort is stable so equal scores keep
//! their input order and re-runs over identical input are diff-friendly.

use crate::core::{AssetRecord, ScoredAsset};
use crate::observability::{set_current_line, set_phase, Phase};
use crate::scoring::{self, RuleSet};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Scored assets in ranked order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrioritizedAssets {
    assets: Vec<ScoredAsset>,
}

impl PrioritizedAssets {
    /// Number of records processed.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredAsset> {
        self.assets.iter()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.assets.first().map(ScoredAsset::score)
    }

    /// Number of assets per distinct score, highest score first.
    pub fn score_histogram(&self) -> Vec<(u32, usize)> {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for asset in &self.assets {
            *counts.entry(asset.score()).or_default() += 1;
        }
        counts.into_iter().rev().collect()
    }

    pub fn into_assets(self) -> Vec<ScoredAsset> {
        self.assets
    }
}

impl<'a> IntoIterator for &'a PrioritizedAssets {
    type Item = &'a ScoredAsset;
    type IntoIter = std::slice::Iter<'a, ScoredAsset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for PrioritizedAssets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.assets.serialize(serializer)
    }
}

/// Score and rank records with the built-in rule tables.
pub fn prioritize(records: Vec<AssetRecord>) -> PrioritizedAssets {
    prioritize_with(RuleSet::standard(), records)
}

/// Score and rank records with a given rule set.
pub fn prioritize_with(rules: &RuleSet, records: Vec<AssetRecord>) -> PrioritizedAssets {
    let mut assets: Vec<ScoredAsset> = {
        let _phase = set_phase(Phase::Scoring);
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let _record = set_current_line(index + 1);
                let result = scoring::score_with(rules, &record);
                ScoredAsset { record, result }
            })
            .collect()
    };

    let _phase = set_phase(Phase::Ranking);
    // `sort_by_key` is stable: equal scores keep input order.
    assets.sort_by_key(|asset| std::cmp::Reverse(asset.score()));

    log::debug!("Ranked {} assets", assets.len());
    PrioritizedAssets { assets }
}
