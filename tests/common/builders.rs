//! Test builders — ergonomic constructors for `ClinicalRecord` fixtures and
//! validator wiring against temporary stores.

use std::path::{Path, PathBuf};

use clinote_core::{ClinicalRecord, ErrorLogger, RecordInput, Validator};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`ClinicalRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::valid()
///     .blood_pressure("80/120")
///     .without("dosage_instructions")
///     .build();
/// ```
pub struct RecordBuilder {
    record: ClinicalRecord,
}

impl RecordBuilder {
    /// Start from the fully valid sample record.
    pub fn valid() -> Self {
        Self {
            record: valid_record(),
        }
    }

    /// Start from an entirely empty record.
    pub fn blank() -> Self {
        Self {
            record: ClinicalRecord::empty(),
        }
    }

    pub fn visit_date(mut self, value: impl Into<String>) -> Self {
        self.record.visit_date = Some(value.into());
        self
    }

    pub fn blood_pressure(mut self, value: impl Into<String>) -> Self {
        self.record.blood_pressure = Some(value.into());
        self
    }

    pub fn medication(mut self, value: impl Into<String>) -> Self {
        self.record.medication_name = Some(value.into());
        self
    }

    pub fn dosage(mut self, value: impl Into<String>) -> Self {
        self.record.dosage_instructions = Some(value.into());
        self
    }

    /// Clear one schema field by name. Panics on an unknown name so typos in
    /// parameterized cases fail loudly.
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "visit_date" => self.record.visit_date = None,
            "primary_complaint" => self.record.primary_complaint = None,
            "blood_pressure" => self.record.blood_pressure = None,
            "medication_name" => self.record.medication_name = None,
            "dosage_instructions" => self.record.dosage_instructions = None,
            other => panic!("unknown schema field: {other}"),
        }
        self
    }

    pub fn build(self) -> ClinicalRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The fully valid record matching the embedded sample note.
pub fn valid_record() -> ClinicalRecord {
    ClinicalRecord {
        visit_date: Some("2026-02-18".to_string()),
        primary_complaint: Some("persistent cough".to_string()),
        blood_pressure: Some("120/80".to_string()),
        medication_name: Some("Amoxicillin".to_string()),
        dosage_instructions: Some("500mg twice daily for 10 days".to_string()),
    }
}

/// Wrap a record in the structured input shape.
pub fn structured(record: &ClinicalRecord) -> RecordInput {
    RecordInput::from_value(serde_json::to_value(record).expect("record serializes to JSON"))
}

// ---------------------------------------------------------------------------
// Store wiring
// ---------------------------------------------------------------------------

/// Build a validator whose error log lives under `dir`.
pub fn validator_in(dir: &Path) -> Validator {
    Validator::new(ErrorLogger::new(log_path(dir)))
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("error_log.txt")
}

/// Error-log lines written under `dir`; empty when no store was created.
pub fn log_lines(dir: &Path) -> Vec<String> {
    match std::fs::read_to_string(log_path(dir)) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
