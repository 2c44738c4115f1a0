//! Remote summarization service configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_model() -> String {
    String::from("gpt-5-mini")
}

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_monthly_budget_usd() -> f64 {
    20.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key. Empty means remote summarization is disabled.
    #[serde(default)]
    pub api_key: String,

    /// Model used for report summaries.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL, without a trailing `/responses`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. A timed-out call falls back to local summarization.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Informational monthly spend ceiling, reported by `ai-status`.
    #[serde(default = "default_monthly_budget_usd")]
    pub monthly_budget_usd: f64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            monthly_budget_usd: default_monthly_budget_usd(),
        }
    }
}

impl OpenAiConfig {
    /// Check if a credential is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Reject values that would make every remote call fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout, a base URL
    /// that is not http(s), an empty model, or a negative budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(invalid("openai.timeout_secs", "must be greater than zero"));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(invalid("openai.base_url", "must start with http:// or https://"));
        }
        if self.model.trim().is_empty() {
            return Err(invalid("openai.model", "must not be empty"));
        }
        if self.monthly_budget_usd < 0.0 {
            return Err(invalid("openai.monthly_budget_usd", "must not be negative"));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
