//! Pipeline glue: extract → normalize → validate → persist.
//!
//! One call, two independent side effects: the output document is always
//! written, and every violation is appended to the error log. Callers must
//! not assume an ordering between the two; both complete before `run`
//! returns.

use std::path::PathBuf;

use clinote_core::{ClinicalRecord, Config, ErrorLogger, OutputWriter, ValidationResult, Validator};
use clinote_extract::{ExtractError, Extractor, MockExtractor, OpenAiExtractor};

/// Visit note used when no `--note` file is given.
pub const SAMPLE_NOTE: &str = "\
Patient presented today, Feb 18, 2026, complaining of a persistent cough.
BP was 120/80. Prescribed Amoxicillin 500mg to be taken twice daily for 10 days.
Follow-up in two weeks.
";

/// Everything a caller needs to report on one pipeline run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub record: ClinicalRecord,
    pub result: ValidationResult,
    pub output_path: PathBuf,
    pub error_log_path: PathBuf,
}

/// Pick the extraction collaborator for this run.
///
/// The live path requires a credential; its absence is a fatal configuration
/// error raised here, before any record exists.
pub fn build_extractor(config: &Config) -> Result<Box<dyn Extractor>, ExtractError> {
    if config.extraction.use_mock {
        tracing::debug!("using mock extraction");
        Ok(Box::new(MockExtractor))
    } else {
        tracing::debug!(model = %config.extraction.model, "using live extraction");
        Ok(Box::new(OpenAiExtractor::new(&config.extraction)?))
    }
}

/// Run the full pipeline over one note.
///
/// The record is persisted regardless of the verdict. Data-quality problems
/// never abort the run; only extraction failures and unwritable stores do.
pub fn run(config: &Config, extractor: &dyn Extractor, note: &str) -> anyhow::Result<RunReport> {
    let input = extractor.extract(note)?;

    let validator = Validator::new(ErrorLogger::new(&config.storage.error_log_path));
    let validation = validator.validate(input)?;

    OutputWriter::new(&config.storage.output_path).write(&validation.record)?;

    Ok(RunReport {
        record: validation.record,
        result: validation.result,
        output_path: config.storage.output_path.clone(),
        error_log_path: config.storage.error_log_path.clone(),
    })
}
