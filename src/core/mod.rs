pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    AssetRecord, FieldType, RecordError, RuleMatch, ScoreResult, ScoredAsset, SignalKind,
    SCORE_FIELD, TAGS_FIELD,
};
