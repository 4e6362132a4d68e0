//! Typed rule descriptors and the standard rule tables.
//!
//! A [`RuleSet`] is an ordered list of [`RuleGroup`]s. Each group decides how
//! many of its rules may fire for one record:
//!
//! - [`GroupMode::FirstMatch`]: rules are tried in list order and at most one
//!   fires. Precedence is the list order, not where a substring occurs.
//! - [`GroupMode::PerItem`]: the record's `tech` entries are visited in input
//!   order and each entry fires the first rule it matches. Duplicate entries
//!   fire independently.

use crate::core::{AssetRecord, RuleMatch, SignalKind};
use once_cell::sync::Lazy;

/// Weight of any keyword hit in the URL or host.
pub const KEYWORD_WEIGHT: u32 = 30;
/// Weight of each high-risk technology entry.
pub const TECH_WEIGHT: u32 = 20;

/// High-signal substrings, in precedence order.
pub const HIGH_SIGNAL_KEYWORDS: [&str; 11] = [
    "admin",
    "internal",
    "staging",
    "dev",
    "api",
    "vpn",
    "jira",
    "grafana",
    "prometheus",
    "jenkins",
    "gitlab",
];

/// Status codes worth a closer look, with their weights.
pub const INTERESTING_STATUS_CODES: [(i64, u32); 3] = [(403, 20), (401, 25), (500, 15)];

/// Technology names (lower case) that raise an asset's priority.
pub const HIGH_RISK_TECH: [&str; 4] = ["jenkins", "old-version", "iis", "php"];

static STANDARD_RULES: Lazy<RuleSet> = Lazy::new(RuleSet::build_standard);

/// Condition a rule tests against a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Keyword occurs in the lower-cased `url` or `host`.
    Substring(&'static str),
    /// `status_code` equals the given value.
    StatusEquals(i64),
    /// A `tech` entry equals the given name, ignoring case.
    TechNamed(&'static str),
}

/// One weighted rule. The tag it produces is `<kind>:<label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: SignalKind,
    pub predicate: Predicate,
    pub weight: u32,
}

impl Rule {
    pub fn keyword(keyword: &'static str, weight: u32) -> Self {
        Self {
            kind: SignalKind::Keyword,
            predicate: Predicate::Substring(keyword),
            weight,
        }
    }

    pub fn status(code: i64, weight: u32) -> Self {
        Self {
            kind: SignalKind::Status,
            predicate: Predicate::StatusEquals(code),
            weight,
        }
    }

    pub fn tech(name: &'static str, weight: u32) -> Self {
        Self {
            kind: SignalKind::Tech,
            predicate: Predicate::TechNamed(name),
            weight,
        }
    }

    /// Test the rule against a whole record. Returns the tag label on a hit.
    ///
    /// `TechNamed` rules never match here; they are only evaluated per item.
    fn match_record(&self, record: &LoweredRecord<'_>) -> Option<String> {
        match &self.predicate {
            Predicate::Substring(keyword) => (record.url.contains(keyword)
                || record.host.contains(keyword))
            .then(|| (*keyword).to_string()),
            Predicate::StatusEquals(code) => {
                (record.status_code == *code).then(|| code.to_string())
            }
            Predicate::TechNamed(_) => None,
        }
    }

    /// Test the rule against a single `tech` entry. The label keeps the
    /// entry's original spelling.
    fn match_item(&self, item: &str) -> Option<String> {
        match &self.predicate {
            Predicate::TechNamed(name) => {
                (item.to_lowercase() == *name).then(|| item.to_string())
            }
            _ => None,
        }
    }

    /// The tag this rule emits for a given label.
    pub fn tag_for(&self, label: &str) -> String {
        format!("{}:{}", self.kind, label)
    }

    fn fire(&self, label: String) -> RuleMatch {
        RuleMatch {
            kind: self.kind,
            label,
            weight: self.weight,
        }
    }
}

/// How many rules of a group may fire for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    FirstMatch,
    PerItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    pub name: &'static str,
    pub mode: GroupMode,
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    fn evaluate(&self, record: &LoweredRecord<'_>, matches: &mut Vec<RuleMatch>) {
        match self.mode {
            GroupMode::FirstMatch => {
                if let Some(hit) = self.rules.iter().find_map(|rule| {
                    rule.match_record(record).map(|label| rule.fire(label))
                }) {
                    matches.push(hit);
                }
            }
            GroupMode::PerItem => {
                for item in record.tech {
                    if let Some(hit) = self
                        .rules
                        .iter()
                        .find_map(|rule| rule.match_item(item).map(|label| rule.fire(label)))
                    {
                        matches.push(hit);
                    }
                }
            }
        }
    }
}

/// Ordered collection of rule groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    groups: Vec<RuleGroup>,
}

impl RuleSet {
    pub fn new(groups: Vec<RuleGroup>) -> Self {
        Self { groups }
    }

    /// The built-in tables: keywords, then status codes, then technologies.
    pub fn standard() -> &'static RuleSet {
        &STANDARD_RULES
    }

    fn build_standard() -> RuleSet {
        RuleSet::new(vec![
            RuleGroup {
                name: "keyword",
                mode: GroupMode::FirstMatch,
                rules: HIGH_SIGNAL_KEYWORDS
                    .iter()
                    .map(|&kw| Rule::keyword(kw, KEYWORD_WEIGHT))
                    .collect(),
            },
            RuleGroup {
                name: "status",
                mode: GroupMode::FirstMatch,
                rules: INTERESTING_STATUS_CODES
                    .iter()
                    .map(|&(code, weight)| Rule::status(code, weight))
                    .collect(),
            },
            RuleGroup {
                name: "tech",
                mode: GroupMode::PerItem,
                rules: HIGH_RISK_TECH
                    .iter()
                    .map(|&name| Rule::tech(name, TECH_WEIGHT))
                    .collect(),
            },
        ])
    }

    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    /// Evaluate every group in order and collect what fired.
    pub fn evaluate(&self, record: &AssetRecord) -> Vec<RuleMatch> {
        let lowered = LoweredRecord::new(record);
        let mut matches = Vec::new();
        for group in &self.groups {
            group.evaluate(&lowered, &mut matches);
        }
        matches
    }

    /// Weight of the rule that produced `tag`, if any rule could have.
    pub fn weight_of_tag(&self, tag: &str) -> Option<u32> {
        let (kind, label) = tag.split_once(':')?;
        self.groups
            .iter()
            .flat_map(|group| group.rules.iter())
            .filter(|rule| rule.kind.as_str() == kind)
            .find(|rule| match &rule.predicate {
                Predicate::Substring(keyword) => *keyword == label,
                Predicate::StatusEquals(code) => code.to_string() == label,
                Predicate::TechNamed(name) => label.to_lowercase() == *name,
            })
            .map(|rule| rule.weight)
    }
}

/// Record fields prepared once for case-insensitive matching.
struct LoweredRecord<'a> {
    url: String,
    host: String,
    status_code: i64,
    tech: &'a [String],
}

impl<'a> LoweredRecord<'a> {
    fn new(record: &'a AssetRecord) -> Self {
        Self {
            url: record.url().to_lowercase(),
            host: record.host().to_lowercase(),
            status_code: record.status_code(),
            tech: record.tech(),
        }
    }
}
