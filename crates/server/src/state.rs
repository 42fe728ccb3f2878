use docsum_common::{AppConfig, Result};
use docsum_llm::{LlmClient, OpenAiClient, Summarizer};
use std::sync::Arc;

/// Shared application state
///
/// Read-only after startup; requests share nothing mutable.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarizer bound to the configured provider
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    /// Create state backed by the OpenAI Responses API
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = OpenAiClient::new(config.openai_base_url.clone())?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create state around any completion backend
    pub fn with_client(config: AppConfig, client: Arc<dyn LlmClient>) -> Self {
        let summarizer =
            Summarizer::new(client, config.llm_model.clone(), config.max_output_tokens);

        Self {
            config,
            summarizer: Arc::new(summarizer),
        }
    }
}
