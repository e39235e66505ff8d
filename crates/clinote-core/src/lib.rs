//! clinote-core — validation engine for extracted clinical records.
//!
//! This crate exposes the pipeline layers that sit between the extraction
//! collaborator and the persistence sinks, plus the shared types used across
//! all of them.
//!
//! # Architecture
//!
//! ```text
//! Extractor ──► Normalizer ──► Validator ──► verdict
//!                                 │
//!                                 └──► ErrorLogger (one line per violation)
//! ```
//!
//! The [`OutputWriter`](output::OutputWriter) persists every record, valid or
//! not; it is an independent side effect of a run, not part of the verdict.
//! Bad data is a normal outcome here — validators return error strings, never
//! `Err`. Only the persistence sinks can fail a validation call.

pub mod config;
pub mod error_log;
pub mod normalize;
pub mod output;
pub mod types;
pub mod validate;

pub use config::Config;
pub use error_log::ErrorLogger;
pub use normalize::{normalize, Normalized, RecordInput};
pub use output::OutputWriter;
pub use types::{ClinicalRecord, ValidationResult, SCHEMA_FIELDS};
pub use validate::{Validation, Validator};

use std::path::PathBuf;
use thiserror::Error;

/// Fatal I/O failures from the persistence sinks.
///
/// Data-quality problems never surface here — those are accumulated as error
/// strings in a [`ValidationResult`]. A `StoreError` means the error log or
/// the output document could not be written, which aborts the run.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to append to error log at {path}: {source}")]
    LogAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write structured output to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}
