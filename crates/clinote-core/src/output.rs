//! Output writer — persists the normalized record as a JSON document.
//!
//! Runs for every record, valid or not: the document reflects the record as
//! extracted and normalized, never a cleaned-up version. Pretty-printed with
//! two-space indentation for human inspection.

use std::path::{Path, PathBuf};

use crate::types::ClinicalRecord;
use crate::StoreError;

pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the record, creating parent directories as needed. Exactly one
    /// document per run; an existing document from a previous run is
    /// replaced.
    pub fn write(&self, record: &ClinicalRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let mut doc = serde_json::to_string_pretty(record)?;
        doc.push('\n');
        std::fs::write(&self.path, doc).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}
