// Test utility module for assetrank integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scan directory with an `httpx.json` written into it.
pub struct ScanDir {
    pub dir: TempDir,
}

impl ScanDir {
    pub fn with_input(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("httpx.json"), content).expect("Failed to write input");
        Self { dir }
    }

    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("prioritized_assets.json")
    }

    pub fn read_output(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.output_path()).expect("Missing output file");
        serde_json::from_str(&content).expect("Output is not valid JSON")
    }
}

/// `(host, priority_score)` pairs in output order.
pub fn host_scores(output: &serde_json::Value) -> Vec<(String, u64)> {
    output
        .as_array()
        .expect("Output should be an array")
        .iter()
        .map(|asset| {
            (
                asset["host"].as_str().unwrap_or_default().to_string(),
                asset["priority_score"].as_u64().expect("priority_score"),
            )
        })
        .collect()
}
