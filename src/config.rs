//! Run configuration.
//!
//! File names are fixed by the surrounding pipeline: the probing stage
//! writes `httpx.json` into the working directory and the next stage
//! expects `prioritized_assets.json` next to it.

use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Input file read from the working directory.
pub const INPUT_FILE_NAME: &str = "httpx.json";
/// Output file written into the working directory.
pub const OUTPUT_FILE_NAME: &str = "prioritized_assets.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub verbosity: u8,
}

impl RunConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            verbosity: 0,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn input_path(&self) -> PathBuf {
        self.output_dir.join(INPUT_FILE_NAME)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }

    /// Default log level for the verbosity count. `RUST_LOG` takes
    /// precedence when set.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_inside_output_dir() {
        let config = RunConfig::new("/tmp/recon/example.com");
        assert_eq!(
            config.input_path(),
            PathBuf::from("/tmp/recon/example.com/httpx.json")
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("/tmp/recon/example.com/prioritized_assets.json")
        );
        assert_eq!(config.output_dir(), Path::new("/tmp/recon/example.com"));
    }

    #[test]
    fn test_log_level_follows_verbosity() {
        let levels: Vec<_> = (0..5)
            .map(|v| RunConfig::new(".").with_verbosity(v).log_level())
            .collect();
        assert_eq!(
            levels,
            vec![
                LevelFilter::Warn,
                LevelFilter::Info,
                LevelFilter::Debug,
                LevelFilter::Trace,
                LevelFilter::Trace,
            ]
        );
    }
}
