//! Newline-delimited JSON input.
//!
//! Each line is parsed on its own into a `Result<AssetRecord, SkipReason>`.
//! Bad lines are collected, never propagated: one corrupt line must not
//! abort the run. Only I/O failures while reading are fatal.

use crate::core::{AssetRecord, Error, Result};
use crate::errors::{LoadResults, SkipReason};
use crate::observability::{set_current_line, set_phase, Phase};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a single input line.
pub fn parse_line(line: &[u8]) -> std::result::Result<AssetRecord, SkipReason> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Err(SkipReason::Blank);
    }

    let value: serde_json::Value =
        serde_json::from_slice(line).map_err(|e| SkipReason::InvalidJson(e.to_string()))?;
    Ok(AssetRecord::try_from(value)?)
}

/// Parse every line of a reader.
///
/// Returns an error only if reading fails; the caller supplies the path for
/// the message via [`load_assets`].
pub fn parse_assets<R: BufRead>(reader: R) -> std::io::Result<LoadResults<AssetRecord>> {
    let mut results = LoadResults::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let _line = set_current_line(line_number);
        let line = line?;
        let outcome = parse_line(&line);
        if let Err(reason) = &outcome {
            log::debug!("Skipping line {line_number} ({}): {reason}", reason.as_str());
        }
        results.push(line_number, outcome);
    }

    Ok(results)
}

/// Load all asset records from an NDJSON file.
pub fn load_assets(path: &Path) -> Result<LoadResults<AssetRecord>> {
    let _phase = set_phase(Phase::Loading);

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::missing_input(path),
        _ => Error::read(path, e),
    })?;
    let results = parse_assets(BufReader::new(file)).map_err(|e| Error::read(path, e))?;

    log::info!(
        "Loaded {} records from {} ({} lines)",
        results.success_count(),
        path.display(),
        results.total_count()
    );
    if results.malformed_count() > 0 {
        log::warn!(
            "Skipped {} malformed lines in {}",
            results.malformed_count(),
            path.display()
        );
    }

    Ok(results)
}
