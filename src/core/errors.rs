//! Shared error types for the application

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal errors for a prioritization run.
///
/// Per-line input problems are not errors; the loader reports them as
/// skipped lines instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("{} not found", .path.display())]
    MissingInput { path: PathBuf },

    /// File system errors while reading input or writing output
    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action: "failed to read",
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action: "failed to write",
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the error means the expected input was never produced.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_path() {
        let err = Error::missing_input("/tmp/scan/httpx.json");
        assert_eq!(err.to_string(), "/tmp/scan/httpx.json not found");
        assert!(err.is_missing_input());
    }

    #[test]
    fn io_errors_carry_action_and_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::write(Path::new("out/prioritized_assets.json"), source);
        assert_eq!(
            err.to_string(),
            "failed to write out/prioritized_assets.json"
        );
        assert!(!err.is_missing_input());
        assert!(std::error::Error::source(&err).is_some());
    }
}
