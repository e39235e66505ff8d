//! Configuration types for clinote.
//!
//! [`Config::load`] reads `~/.config/clinote/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies environment
//! overrides (`USE_MOCK`, `OPENAI_API_KEY`). [`Config::defaults`] returns the
//! same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[extraction]
use_mock = true
model    = "gpt-4o"
api_base = "https://api.openai.com/v1"

[storage]
output_path    = "outputs/structured.json"
error_log_path = "logs/error_log.txt"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/clinote/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// `[extraction]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Select the deterministic mock collaborator instead of the live
    /// endpoint. Overridden by the `USE_MOCK` environment variable.
    #[serde(default = "default_use_mock")]
    pub use_mock: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Credential for the live path. Usually supplied via `OPENAI_API_KEY`
    /// rather than the config file; required only when `use_mock` is false.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_use_mock() -> bool { true }
fn default_model() -> String { "gpt-4o".to_string() }
fn default_api_base() -> String { "https://api.openai.com/v1".to_string() }

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            use_mock: default_use_mock(),
            model: default_model(),
            api_base: default_api_base(),
            api_key: None,
        }
    }
}

/// `[storage]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Where the structured output document is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Append-only store for per-violation diagnostic lines.
    #[serde(default = "default_error_log_path")]
    pub error_log_path: PathBuf,
}

fn default_output_path() -> PathBuf { PathBuf::from("outputs/structured.json") }
fn default_error_log_path() -> PathBuf { PathBuf::from("logs/error_log.txt") }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            error_log_path: default_error_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/clinote/config.toml`, layered on top of the
    /// built-in defaults, then apply environment overrides. Creates the file
    /// with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        let mut cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem or the
    /// environment.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("USE_MOCK") {
            self.extraction.use_mock = truthy(&value);
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                self.extraction.api_key = Some(key);
            }
        }
    }
}

/// Recognized truthy spellings for boolean environment flags.
pub fn truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("clinote")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
