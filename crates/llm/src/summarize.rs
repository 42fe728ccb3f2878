use docsum_common::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::parse::parse_summary;
use crate::prompts::build_prompt;
use crate::types::{CompletionRequest, SummarizeParams, Summary};

/// Summarizer for a single document
///
/// One provider call per [`Summarizer::summarize`]; failures are returned,
/// never retried.
pub struct Summarizer {
    client: Arc<dyn LlmClient>,
    model: String,
    max_output_tokens: u32,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(
        client: Arc<dyn LlmClient>,
        model: impl Into<String>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            max_output_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the completion request for `params` without sending it
    pub fn completion_request(&self, params: &SummarizeParams) -> CompletionRequest {
        CompletionRequest {
            api_key: params.api_key.clone(),
            model: self.model.clone(),
            input: build_prompt(&params.content, params.length, params.tone),
            max_output_tokens: self.max_output_tokens,
            json_output: true,
        }
    }

    /// Summarize a document
    pub async fn summarize(&self, params: SummarizeParams) -> Result<Summary> {
        info!(
            "Starting summarization - Content length: {} chars, length={}, tone={}",
            params.content.chars().count(),
            params.length,
            params.tone
        );

        let request = self.completion_request(&params);
        let raw = self.client.generate(request).await?;
        debug!("Provider output length: {}", raw.len());

        let summary = parse_summary(&raw)?;
        info!("Summarization complete - {} bullet points", summary.bullets.len());

        Ok(summary)
    }
}
