use docsum_common::{DocsumError, ErrorResponse, Result, SummarizeRequest, SummarizeResponse};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::state::Msg;

/// Shown when the server fails without a usable error body
const FALLBACK_ERROR: &str = "Failed to summarize";

/// HTTP client for the summarize endpoint
#[derive(Debug, Clone)]
pub struct EndpointClient {
    base_url: String,
    client: Client,
}

impl EndpointClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| DocsumError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn summarize_url(&self) -> String {
        format!("{}/summarize", self.base_url)
    }

    /// Send one summarize request and turn the outcome into a form message
    pub async fn submit(&self, request: &SummarizeRequest) -> Msg {
        info!("Submitting {} characters for summarization", request.content.chars().count());

        let response = match self.client.post(self.summarize_url()).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Summarize request failed: {}", e);
                return Msg::SubmitFailed(format!("Could not reach the summarize endpoint: {}", e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read response body: {}", e);
                return Msg::SubmitFailed(FALLBACK_ERROR.to_string());
            }
        };
        debug!("Summarize endpoint answered {} ({} bytes)", status, body.len());

        interpret_response(status.is_success(), &body)
    }
}

/// Map an endpoint response to a form message.
///
/// Error bodies are surfaced verbatim.
pub fn interpret_response(success: bool, body: &str) -> Msg {
    if success {
        return match serde_json::from_str::<SummarizeResponse>(body) {
            Ok(response) => Msg::SubmitSucceeded(response),
            Err(e) => {
                warn!("Unexpected success body: {}", e);
                Msg::SubmitFailed(FALLBACK_ERROR.to_string())
            }
        };
    }

    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string());
    Msg::SubmitFailed(message)
}
