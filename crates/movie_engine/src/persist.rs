use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use movie_core::{render_bulk_document, MovieRecord};
use scrape_logging::{scrape_error, scrape_info};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("serializing bulk document failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Atomically replace a file by writing a sibling temp file then renaming it.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn write(&self, content: &str) -> Result<&Path, PersistError> {
        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_output_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&self.target)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(&self.target)
    }
}

fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        Ok(())
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))
    }
}

/// Renders `records` as a bulk document and writes it to `path`.
pub fn write_bulk_document(path: &Path, records: &[MovieRecord]) -> Result<PathBuf, PersistError> {
    let doc = render_bulk_document(records)?;
    let writer = AtomicFileWriter::new(path);
    writer.write(&doc).map(Path::to_path_buf)
}

/// Like [`write_bulk_document`], but failures are only logged.
pub fn save_bulk_document(path: &Path, records: &[MovieRecord]) {
    match write_bulk_document(path, records) {
        Ok(written) => scrape_info!("wrote {} records to {:?}", records.len(), written),
        Err(err) => scrape_error!("failed to write {:?}: {}", path, err),
    }
}
