//! Error logger — append-only store of per-violation diagnostic entries.
//!
//! One line per violation, never one per record: a record with three
//! violations yields three lines. Lines from the same validation call share
//! one timestamp (second resolution) and one record snapshot. Existing lines
//! are never rewritten or deleted; the store and its parent directory are
//! created on first write.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::types::ClinicalRecord;
use crate::StoreError;

pub struct ErrorLogger {
    path: PathBuf,
}

impl ErrorLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `[timestamp] message | record=snapshot` line per error.
    ///
    /// The timestamp is local wall-clock time, formatted once so every line
    /// of the batch matches; the snapshot is the full normalized record as
    /// compact JSON, serialized once per call.
    pub fn append(&self, errors: &[String], record: &ClinicalRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let snapshot = serde_json::to_string(record)?;
        for error in errors {
            writeln!(file, "[{timestamp}] {error} | record={snapshot}")
                .map_err(|source| self.io_error(source))?;
        }
        tracing::debug!(lines = errors.len(), path = %self.path.display(), "appended to error log");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::LogAppend {
            path: self.path.clone(),
            source,
        }
    }
}
