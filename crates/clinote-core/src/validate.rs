//! Field validators and the validation orchestrator.
//!
//! Each validator is a pure function of the normalized record returning zero
//! or more error strings. All validators run on every record, in a fixed
//! order (visit date, blood pressure, medication, dosage) — a failure in one
//! field never suppresses diagnostics from another. The [`Validator`]
//! orchestrator merges their output behind any normalization errors, logs
//! every violation, and renders the verdict.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error_log::ErrorLogger;
use crate::normalize::{normalize, Normalized, RecordInput};
use crate::types::{ClinicalRecord, ValidationResult};
use crate::StoreError;

/// Inclusive plausibility range for systolic pressure (mmHg).
const SYSTOLIC_RANGE: RangeInclusive<i64> = 60..=250;
/// Inclusive plausibility range for diastolic pressure (mmHg).
const DIASTOLIC_RANGE: RangeInclusive<i64> = 30..=150;

/// Exact `YYYY-MM-DD` shape: four-digit year, literal hyphens, nothing else.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape regex must be valid"));

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// `visit_date` must be present and a real calendar date in `YYYY-MM-DD`
/// form. Shape and calendar validity are both enforced (Feb 30 is rejected).
pub fn check_visit_date(record: &ClinicalRecord) -> Vec<String> {
    match record.visit_date.as_deref() {
        None | Some("") => vec!["Missing visit_date".to_string()],
        Some(value) => {
            let well_formed = DATE_SHAPE.is_match(value)
                && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
            if well_formed {
                Vec::new()
            } else {
                vec![format!("Invalid visit_date format: {value}")]
            }
        }
    }
}

/// `blood_pressure` must be `<systolic>/<diastolic>` with both sides integer.
/// Once both sides parse, the logic and range checks are independent — a
/// single reading can produce up to three errors.
pub fn check_blood_pressure(record: &ClinicalRecord) -> Vec<String> {
    let Some(value) = record.blood_pressure.as_deref().filter(|v| !v.is_empty()) else {
        return vec!["Missing blood_pressure".to_string()];
    };
    let Some((left, right)) = value.split_once('/') else {
        return vec![format!("Invalid blood_pressure format (missing '/'): {value}")];
    };
    let (Ok(sys), Ok(dia)) = (left.trim().parse::<i64>(), right.trim().parse::<i64>()) else {
        return vec![format!("Blood pressure must be numeric like '120/80': {value}")];
    };

    let mut errors = Vec::new();
    if sys <= dia {
        errors.push(format!(
            "Blood pressure logic error (systolic <= diastolic): {value}"
        ));
    }
    if !SYSTOLIC_RANGE.contains(&sys) {
        errors.push(format!("Systolic out of expected range: {sys}"));
    }
    if !DIASTOLIC_RANGE.contains(&dia) {
        errors.push(format!("Diastolic out of expected range: {dia}"));
    }
    errors
}

/// `medication_name` must be non-empty after trimming whitespace.
pub fn check_medication(record: &ClinicalRecord) -> Vec<String> {
    presence(record.medication_name.as_deref(), "medication_name")
}

/// `dosage_instructions` must be non-empty after trimming whitespace.
pub fn check_dosage(record: &ClinicalRecord) -> Vec<String> {
    presence(record.dosage_instructions.as_deref(), "dosage_instructions")
}

fn presence(value: Option<&str>, field: &str) -> Vec<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Vec::new(),
        _ => vec![format!("Missing {field}")],
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Runs the normalizer and every field validator, logging all violations.
///
/// The [`ErrorLogger`] is an explicit dependency so callers (and tests) name
/// the log store instead of relying on ambient state.
pub struct Validator {
    logger: ErrorLogger,
}

/// A normalized record plus its verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub record: ClinicalRecord,
    pub result: ValidationResult,
}

impl Validator {
    pub fn new(logger: ErrorLogger) -> Self {
        Self { logger }
    }

    /// Validate one extracted record.
    ///
    /// Normalization errors come first, then field errors in fixed order.
    /// All violations are appended to the error log before this returns;
    /// only a log-store I/O failure aborts the call.
    pub fn validate(&self, input: RecordInput) -> Result<Validation, StoreError> {
        let Normalized { record, mut errors } = normalize(input);
        errors.extend(check_visit_date(&record));
        errors.extend(check_blood_pressure(&record));
        errors.extend(check_medication(&record));
        errors.extend(check_dosage(&record));

        if !errors.is_empty() {
            tracing::warn!(error_count = errors.len(), "record failed validation");
            self.logger.append(&errors, &record)?;
        }

        Ok(Validation {
            record,
            result: ValidationResult::new(errors),
        })
    }
}
