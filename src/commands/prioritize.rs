//! The prioritize command: load, score, rank, write.
//!
//! Fatal errors (missing input, unreadable input) return before the writer
//! runs, so the output file is either untouched or complete.

use crate::config::RunConfig;
use crate::core::{Error, Result};
use crate::io::{file_exists, load_assets, write_prioritized};
use crate::priority::prioritize;
use std::path::PathBuf;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Assets written to the output
    pub prioritized: usize,
    /// Input lines skipped, blank lines included
    pub skipped: usize,
    pub top_score: Option<u32>,
    /// `(score, count)` pairs, highest score first
    pub histogram: Vec<(u32, usize)>,
    pub output_path: PathBuf,
}

pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let input_path = config.input_path();
    if !file_exists(&input_path) {
        return Err(Error::missing_input(input_path));
    }

    let loaded = load_assets(&input_path)?;
    let skipped = loaded.failure_count();
    let ranked = prioritize(loaded.successes);

    let output_path = config.output_path();
    write_prioritized(&output_path, &ranked)?;

    Ok(RunSummary {
        prioritized: ranked.len(),
        skipped,
        top_score: ranked.top_score(),
        histogram: ranked.score_histogram(),
        output_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_without_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = RunConfig::new(dir.path());

        let err = run(&config).unwrap_err();
        assert!(err.is_missing_input());
        assert!(!config.output_path().exists());
    }

    #[test]
    fn test_run_reports_counts() {
        let dir = TempDir::new().unwrap();
        let config = RunConfig::new(dir.path());
        std::fs::write(
            config.input_path(),
            "{\"host\":\"jenkins.example.com\",\"status_code\":403}\nnot-json\n\n{\"host\":\"x\"}\n",
        )
        .unwrap();

        let summary = run(&config).unwrap();
        assert_eq!(summary.prioritized, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.top_score, Some(50));
        assert_eq!(summary.histogram, vec![(50, 1), (0, 1)]);
        assert_eq!(summary.output_path, config.output_path());
        assert!(summary.output_path.exists());
    }
}
