//! Static fixtures used across harnesses.

/// JSON-encoded record matching the embedded sample note.
pub const ENCODED_VALID: &str = r#"{"visit_date":"2026-02-18","primary_complaint":"persistent cough","blood_pressure":"120/80","medication_name":"Amoxicillin","dosage_instructions":"500mg twice daily for 10 days"}"#;

/// Truncated JSON that cannot be decoded.
pub const ENCODED_BROKEN: &str = r#"{"visit_date": "2026-02-18", "blood_pre"#;

/// Decodes fine, but to a JSON string rather than a mapping.
pub const ENCODED_NON_OBJECT: &str = r#""just a string, not a record""#;

/// `visit_date` values the strict validator must reject.
pub const BAD_DATES: &[&str] = &[
    "2026-02-30", // no such calendar day
    "2026-13-01", // month out of range
    "2026-2-8",   // unpadded
    "20260218",   // hyphens missing
    "18-02-2026", // wrong field order
    "2026/02/18", // wrong separator
    "2026-02-18 ", // trailing whitespace
    "Feb 18, 2026",
];
