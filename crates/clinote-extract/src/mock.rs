//! Deterministic mock extractor.
//!
//! Exercises the validation core without a live model dependency: same note
//! in, same record out, no failure path.

use clinote_core::RecordInput;
use serde_json::json;

use crate::{ExtractError, Extractor};

/// Simulates the extraction service for testing and offline runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockExtractor;

impl Extractor for MockExtractor {
    fn extract(&self, _note: &str) -> Result<RecordInput, ExtractError> {
        Ok(RecordInput::from_value(json!({
            "visit_date": "2026-02-18",
            "primary_complaint": "persistent cough",
            "blood_pressure": "120/80",
            "medication_name": "Amoxicillin",
            "dosage_instructions": "500mg twice daily for 10 days",
        })))
    }
}
