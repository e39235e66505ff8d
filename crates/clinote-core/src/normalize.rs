//! Normalizer — resolves heterogeneous extractor output into the canonical
//! [`ClinicalRecord`].
//!
//! Extractors may hand back a structured mapping or a JSON-encoded string of
//! one. The shape is classified exactly once at the boundary
//! ([`RecordInput::from_value`]); validators never inspect raw shapes.
//! Normalization failures are data, not errors: they become the base error
//! list that field validation extends, and the record falls back to empty so
//! every presence check still runs.

use serde_json::{Map, Value};

use crate::types::ClinicalRecord;

/// Input shapes accepted by the normalizer, resolved once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordInput {
    /// Canonical mapping shape, used as-is.
    Structured(Map<String, Value>),
    /// JSON-encoded string form of a record; decoding happens here, not in
    /// the extractor.
    Encoded(String),
    /// Neither shape. Carries the observed JSON type name for diagnostics.
    Invalid(&'static str),
}

impl RecordInput {
    /// Classify an arbitrary JSON value into its input shape.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Structured(map),
            Value::String(raw) => Self::Encoded(raw),
            other => Self::Invalid(json_type_name(&other)),
        }
    }
}

/// A canonical record plus the errors normalization itself produced.
///
/// The errors here are the base list: the orchestrator always merges them
/// ahead of field-level errors, never discards them.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub record: ClinicalRecord,
    pub errors: Vec<String>,
}

/// Coerce an input shape into a canonical record.
pub fn normalize(input: RecordInput) -> Normalized {
    match input {
        RecordInput::Structured(map) => Normalized {
            record: record_from_map(&map),
            errors: Vec::new(),
        },
        RecordInput::Encoded(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Normalized {
                record: record_from_map(&map),
                errors: Vec::new(),
            },
            // A decoded non-object can never be a record; same failure class.
            Ok(_) | Err(_) => Normalized {
                record: ClinicalRecord::empty(),
                errors: vec!["Invalid JSON: could not decode record".to_string()],
            },
        },
        RecordInput::Invalid(type_name) => Normalized {
            record: ClinicalRecord::empty(),
            errors: vec![format!(
                "Invalid type: expected mapping or encoded string, got {type_name}"
            )],
        },
    }
}

/// Take each schema field that is present as a JSON string. Non-string
/// values and unknown keys are ignored.
fn record_from_map(map: &Map<String, Value>) -> ClinicalRecord {
    let field = |name: &str| map.get(name).and_then(Value::as_str).map(str::to_string);
    ClinicalRecord {
        visit_date: field("visit_date"),
        primary_complaint: field("primary_complaint"),
        blood_pressure: field("blood_pressure"),
        medication_name: field("medication_name"),
        dosage_instructions: field("dosage_instructions"),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
