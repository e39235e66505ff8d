//! Core types for clinote-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the canonical [`ClinicalRecord`] and the [`ValidationResult`]
//! verdict.

use serde::{Deserialize, Serialize};

/// Schema field names in validation order.
pub const SCHEMA_FIELDS: &[&str] = &[
    "visit_date",
    "primary_complaint",
    "blood_pressure",
    "medication_name",
    "dosage_instructions",
];

/// A structured clinical record extracted from a free-text visit note.
///
/// Every field is optional. The normalizer populates as many fields as the
/// extractor produced; the remainder are left as `None` and omitted from
/// serialized output. A record is never mutated after normalization —
/// validators only read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    /// Visit date in canonical `YYYY-MM-DD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    /// Free text, informational only — not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_complaint: Option<String>,
    /// Compound `<systolic>/<diastolic>` reading, both integers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage_instructions: Option<String>,
}

impl ClinicalRecord {
    /// The empty record used when normalization cannot recover any fields.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Verdict of running all field validators over one record.
///
/// Errors are kept in detection order: normalization first, then visit date,
/// blood pressure, medication, dosage. A record is valid iff this sequence
/// is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One-line human-readable status for console output.
    pub fn status(&self) -> String {
        if self.is_valid() {
            "Data is valid.".to_string()
        } else {
            format!("Logged {} error(s) to error_log.txt", self.errors.len())
        }
    }
}
