//! clinote-extract — extraction collaborators for clinote.
//!
//! Each collaborator turns a free-text visit note into a
//! [`RecordInput`](clinote_core::RecordInput) for the clinote-core
//! normalizer. The core only requires a record-shaped value back or a
//! distinguishable failure; everything about *how* the fields are extracted
//! lives behind the [`Extractor`] trait.

pub mod mock;
pub mod openai;

pub use mock::MockExtractor;
pub use openai::OpenAiExtractor;

use clinote_core::RecordInput;
use thiserror::Error;

/// Failures of the extraction collaborator. All of these are fatal and
/// pre-validation: no record is produced.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Live extraction requested without a credential.
    #[error("OPENAI_API_KEY not set. Cannot run live extraction.")]
    MissingCredential,

    /// The extraction endpoint could not be reached or answered with an
    /// error status.
    #[error("extraction service error: {0}")]
    Service(String),

    /// The endpoint answered, but not in the expected response shape.
    #[error("malformed extraction response: {0}")]
    MalformedResponse(String),
}

/// Trait implemented by each extraction collaborator.
pub trait Extractor {
    /// Extract structured clinical fields from a raw visit note.
    fn extract(&self, note: &str) -> Result<RecordInput, ExtractError>;
}
