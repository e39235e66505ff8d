//! clinote — clinical note structuring and validation.
//!
//! Extracts structured clinical fields from a free-text visit note, validates
//! the record against the fixed schema, persists it as a JSON document, and
//! logs every violation. This crate exposes the pipeline as a public module
//! so integration tests can drive it directly.
//!
//! # Architecture
//!
//! ```text
//! Extractor ──► Normalizer ──► Validator ──► verdict
//!                                 │
//!                                 └──► ErrorLogger
//!              OutputWriter persists every record, valid or not.
//! ```

pub mod pipeline;

pub use pipeline::{build_extractor, run, RunReport, SAMPLE_NOTE};
