//! Configuration file support for hw2sw.
//!
//! Provides YAML-based configuration through `hw2sw.config.yml` files,
//! including data structures, file loading, validation and the defaults
//! used when neither the file nor the command line sets a value.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::application::dto::{OutputFormat, DEFAULT_TEMPERATURE};
use crate::architecture_generation::domain::ProgrammingLanguage;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "hw2sw.config.yml";

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    /// Name of the environment variable holding the API key
    pub api_key_env: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub request_timeout_secs: Option<u64>,
    pub format: Option<String>,
    pub languages: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Configured output format. Only call on a validated config.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| OutputFormat::from_str(f).ok())
    }

    /// Configured API stub languages. Only call on a validated config.
    pub fn languages(&self) -> Vec<ProgrammingLanguage> {
        self.languages
            .iter()
            .flatten()
            .filter_map(|l| ProgrammingLanguage::from_str(l).ok())
            .collect()
    }
}

/// Effective settings for talking to the LLM service.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub model: String,
    pub api_base_url: String,
    pub api_key_env: String,
    /// Overrides the per-command token budget when set
    pub max_tokens: Option<u32>,
    pub temperature: f32,
    pub request_timeout: Duration,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            max_tokens: None,
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl LlmSettings {
    /// Config values over defaults. Command-line overrides are applied by the caller.
    pub fn from_config(config: Option<&ConfigFile>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        Self {
            model: config.model.clone().unwrap_or(defaults.model),
            api_base_url: config.api_base_url.clone().unwrap_or(defaults.api_base_url),
            api_key_env: config.api_key_env.clone().unwrap_or(defaults.api_key_env),
            max_tokens: config.max_tokens,
            temperature: config.temperature.unwrap_or(defaults.temperature),
            request_timeout: config
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(temperature) = config.temperature {
        if !(0.0..=2.0).contains(&temperature) {
            bail!(
                "Invalid config: temperature must be between 0.0 and 2.0 (got {}).",
                temperature
            );
        }
    }

    if config.max_tokens == Some(0) {
        bail!("Invalid config: max_tokens must be greater than 0.");
    }

    if config.request_timeout_secs == Some(0) {
        bail!("Invalid config: request_timeout_secs must be greater than 0.");
    }

    for (field, value) in [("model", &config.model), ("api_base_url", &config.api_base_url), ("api_key_env", &config.api_key_env)] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!("Invalid config: {} must not be empty.", field);
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref languages) = config.languages {
        for (i, language) in languages.iter().enumerate() {
            if let Err(e) = ProgrammingLanguage::from_str(language) {
                bail!(
                    "Invalid config: languages[{}]: {}\n\n💡 Hint: Supported languages are typescript, python, c and java.",
                    i,
                    e
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
