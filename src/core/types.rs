//! Asset records and their computed scores.
//!
//! An [`AssetRecord`] keeps the complete JSON object it was loaded from so
//! that fields this crate knows nothing about survive the pipeline verbatim.
//! The four fields the scorer reads are validated once at construction and
//! exposed through typed accessors.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Field carrying the computed score in the output.
pub const SCORE_FIELD: &str = "priority_score";
/// Field carrying the computed justification tags in the output.
pub const TAGS_FIELD: &str = "priority_tags";

/// JSON type a known field was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    StringArray,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "a string"),
            Self::Integer => write!(f, "an integer"),
            Self::StringArray => write!(f, "an array of strings"),
        }
    }
}

/// Why a JSON value could not become an [`AssetRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: FieldType,
    },
}

/// One discovered asset, as emitted by the upstream probing stage.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    fields: Map<String, Value>,
    url: String,
    host: String,
    status_code: i64,
    tech: Vec<String>,
}

impl AssetRecord {
    /// Build a record from a JSON object, checking the types of known fields.
    ///
    /// Absent fields and explicit `null`s take their defaults (`""`, `0`,
    /// `[]`). Any other type mismatch rejects the record.
    pub fn from_object(fields: Map<String, Value>) -> Result<Self, RecordError> {
        let url = string_field(&fields, "url")?;
        let host = string_field(&fields, "host")?;
        let status_code = integer_field(&fields, "status_code")?;
        let tech = string_array_field(&fields, "tech")?;

        Ok(Self {
            fields,
            url,
            host,
            status_code,
            tech,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn status_code(&self) -> i64 {
        self.status_code
    }

    pub fn tech(&self) -> &[String] {
        &self.tech
    }

    /// All fields of the source object, including pass-through ones.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Value> for AssetRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::from_object(fields),
            _ => Err(RecordError::NotAnObject),
        }
    }
}

fn string_field(fields: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RecordError::InvalidField {
            field,
            expected: FieldType::String,
        }),
    }
}

fn integer_field(fields: &Map<String, Value>, field: &'static str) -> Result<i64, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value.as_i64().ok_or(RecordError::InvalidField {
            field,
            expected: FieldType::Integer,
        }),
    }
}

fn string_array_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, RecordError> {
    let mismatch = || RecordError::InvalidField {
        field,
        expected: FieldType::StringArray,
    };

    match fields.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned).ok_or_else(mismatch))
            .collect(),
        Some(_) => Err(mismatch()),
    }
}

/// Category of signal a rule contributes. Renders as the tag prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Keyword,
    Status,
    Tech,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Status => "status",
            Self::Tech => "tech",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single fired rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub kind: SignalKind,
    pub label: String,
    pub weight: u32,
}

impl RuleMatch {
    pub fn tag(&self) -> String {
        format!("{}:{}", self.kind, self.label)
    }
}

/// Outcome of scoring one record: every fired rule, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreResult {
    matches: Vec<RuleMatch>,
}

impl ScoreResult {
    pub fn new(matches: Vec<RuleMatch>) -> Self {
        Self { matches }
    }

    /// Sum of the weights of every fired rule.
    pub fn score(&self) -> u32 {
        self.matches.iter().map(|m| m.weight).sum()
    }

    pub fn tags(&self) -> Vec<String> {
        self.matches.iter().map(RuleMatch::tag).collect()
    }

    pub fn matches(&self) -> &[RuleMatch] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// A record paired with its score. Serializes as the original object with
/// `priority_score` and `priority_tags` appended.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAsset {
    pub record: AssetRecord,
    pub result: ScoreResult,
}

impl ScoredAsset {
    pub fn score(&self) -> u32 {
        self.result.score()
    }

    pub fn tags(&self) -> Vec<String> {
        self.result.tags()
    }
}

impl Serialize for ScoredAsset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.record.fields();
        let overwritten = [SCORE_FIELD, TAGS_FIELD]
            .iter()
            .filter(|key| fields.contains_key(**key))
            .count();
        let mut map = serializer.serialize_map(Some(fields.len() + 2 - overwritten))?;

        // Upstream values for the computed fields are replaced in place.
        for (key, value) in fields {
            match key.as_str() {
                SCORE_FIELD => map.serialize_entry(key, &self.score())?,
                TAGS_FIELD => map.serialize_entry(key, &self.tags())?,
                _ => map.serialize_entry(key, value)?,
            }
        }
        if !fields.contains_key(SCORE_FIELD) {
            map.serialize_entry(SCORE_FIELD, &self.score())?;
        }
        if !fields.contains_key(TAGS_FIELD) {
            map.serialize_entry(TAGS_FIELD, &self.tags())?;
        }
        map.end()
    }
}
