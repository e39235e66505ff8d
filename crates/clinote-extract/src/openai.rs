//! Live extractor backed by an OpenAI-compatible chat-completions endpoint.
//!
//! The model is asked for a single JSON object with exactly the schema keys;
//! its raw message content comes back as [`RecordInput::Encoded`] — decoding
//! is the normalizer's job, so a model that answers with broken JSON turns
//! into a normalization error, not a crash.

use serde::{Deserialize, Serialize};

use clinote_core::config::ExtractionConfig;
use clinote_core::{RecordInput, SCHEMA_FIELDS};

use crate::{ExtractError, Extractor};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Blocking HTTP client for the chat-completions endpoint.
pub struct OpenAiExtractor {
    client: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiExtractor {
    /// Build a live extractor from configuration.
    ///
    /// Fails with [`ExtractError::MissingCredential`] when no API key is
    /// configured; the live path cannot run without one.
    pub fn new(cfg: &ExtractionConfig) -> Result<Self, ExtractError> {
        let api_key = cfg
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ExtractError::MissingCredential)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ExtractError::Service(e.to_string()))?;

        Ok(Self {
            client,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: cfg.model.clone(),
        })
    }

    fn prompt(note: &str) -> String {
        format!(
            "You are a clinical data assistant. Extract the following fields from the \
             visit note below and respond with a single JSON object using exactly these \
             keys: {fields}. Use null for any field not stated in the note. Do not add \
             commentary.\n\nNote:\n{note}",
            fields = SCHEMA_FIELDS.join(", "),
        )
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    content: String,
}

impl Extractor for OpenAiExtractor {
    fn extract(&self, note: &str) -> Result<RecordInput, ExtractError> {
        let url = format!("{}/chat/completions", self.api_base);
        let prompt = Self::prompt(note);
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &prompt,
            }],
            response_format: ResponseFormat { kind: "json_object" },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ExtractError::Service(format!("cannot reach extraction endpoint at {url}"))
                } else if e.is_timeout() {
                    ExtractError::Service(format!(
                        "extraction request timed out after {REQUEST_TIMEOUT_SECS}s"
                    ))
                } else {
                    ExtractError::Service(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ExtractError::Service(format!(
                "extraction endpoint returned {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ExtractError::MalformedResponse("response contained no choices".to_string())
            })?;

        tracing::debug!(model = %self.model, "live extraction completed");
        Ok(RecordInput::Encoded(content))
    }
}
