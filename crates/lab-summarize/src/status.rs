//! Remote summarization connectivity probe.

use lab_config::OpenAiConfig;
use lab_core::responses::{AiStatus, AiStatusReport};

use crate::openai::OpenAiClient;

/// Report whether remote summarization is configured and reachable.
///
/// Without a key nothing is sent. With one, a models-list request checks
/// that the key is accepted; any failure becomes [`AiStatus::Error`] with the
/// failure text in the message.
pub async fn ai_status(config: &OpenAiConfig) -> AiStatusReport {
    let report = |configured, status, message: String| AiStatusReport {
        configured,
        model: config.model.clone(),
        status,
        message,
        monthly_budget_usd: config.monthly_budget_usd,
    };

    if !config.is_configured() {
        return report(
            false,
            AiStatus::Inactive,
            "No API key configured. Using local fallback summarization.".to_string(),
        );
    }

    let probe = match OpenAiClient::new(config) {
        Ok(client) => client.list_models().await,
        Err(error) => Err(error),
    };
    match probe {
        Ok(()) => report(
            true,
            AiStatus::Active,
            "OpenAI API is connected and working.".to_string(),
        ),
        Err(error) => {
            tracing::debug!(%error, "model API probe failed");
            report(
                true,
                AiStatus::Error,
                format!("API key set but validation failed: {error}"),
            )
        }
    }
}
