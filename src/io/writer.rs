//! JSON array output.

use crate::core::{Error, Result};
use crate::observability::{set_phase, Phase};
use crate::priority::PrioritizedAssets;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a ranking as one pretty-printed (2-space) JSON array.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_assets(&mut self, assets: &PrioritizedAssets) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, assets)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write the ranking to `path`, replacing any previous file atomically.
///
/// The array is written to a temporary file next to `path` and renamed into
/// place, so `path` is never observed half-written.
pub fn write_prioritized(path: &Path, assets: &PrioritizedAssets) -> Result<()> {
    let _phase = set_phase(Phase::Writing);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::write(path, e))?;

    {
        let mut writer = JsonWriter::new(std::io::BufWriter::new(temp.as_file_mut()));
        writer.write_assets(assets)?;
        writer
            .into_inner()
            .flush()
            .map_err(|e| Error::write(path, e))?;
    }

    temp.persist(path).map_err(|e| Error::write(path, e.error))?;
    log::info!("Wrote {} assets to {}", assets.len(), path.display());
    Ok(())
}
