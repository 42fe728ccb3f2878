use async_trait::async_trait;
use docsum_common::{DocsumError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{
    CompletionRequest, ResponsesRequest, ResponsesResponse, TextFormat, TextOptions,
};

/// OpenAI Responses API client
///
/// Holds no credential; every request carries the caller's key.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new OpenAI client
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| DocsumError::network(format!("Failed to create HTTP client: {}", e)))?;

        info!("OpenAI client initialized: {}", base_url);
        Ok(Self { base_url, client })
    }

    fn responses_url(&self) -> String {
        format!("{}/v1/responses", self.base_url)
    }

    /// Single attempt, no retries
    async fn send(&self, request: &CompletionRequest) -> Result<String> {
        let body = ResponsesRequest {
            model: &request.model,
            input: &request.input,
            max_output_tokens: request.max_output_tokens,
            text: request.json_output.then(|| TextOptions {
                format: TextFormat {
                    kind: "json_object",
                },
            }),
        };

        let response = self
            .client
            .post(self.responses_url())
            .bearer_auth(&request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DocsumError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(DocsumError::provider(format!(
                "OpenAI API error (status {}): {}",
                status, detail
            )));
        }

        let result: ResponsesResponse = response
            .json()
            .await
            .map_err(|e| DocsumError::provider(format!("Failed to parse response: {}", e)))?;

        Ok(extract_output_text(&result))
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, request: CompletionRequest) -> Result<String> {
        debug!(
            "Sending request to OpenAI - Model: {}, Prompt length: {}",
            request.model,
            request.input.len()
        );

        let text = self.send(&request).await?;

        debug!("Received response from OpenAI - Length: {}", text.len());
        Ok(text)
    }
}

/// Collect the generated text from a Responses API body.
///
/// Prefers the aggregated `output_text` field and falls back to joining every
/// `output_text` content part.
pub(crate) fn extract_output_text(response: &ResponsesResponse) -> String {
    if let Some(text) = response.output_text.as_deref().filter(|t| !t.is_empty()) {
        return text.to_string();
    }

    response
        .output
        .iter()
        .flat_map(|item| item.content.iter())
        .filter(|part| part.kind == "output_text")
        .filter_map(|part| part.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ResponsesResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = OpenAiClient::new("https://api.openai.com/").unwrap();
        assert_eq!(client.responses_url(), "https://api.openai.com/v1/responses");
    }

    #[test]
    fn test_extract_prefers_output_text() {
        let response = parse(r#"{"output_text":"{\"summary\":\"S\"}","output":[]}"#);
        assert_eq!(extract_output_text(&response), "{\"summary\":\"S\"}");
    }

    #[test]
    fn test_extract_joins_output_parts() {
        let response = parse(
            r#"{
                "id": "resp_1",
                "output": [
                    {"type": "reasoning", "content": []},
                    {"type": "message", "content": [
                        {"type": "output_text", "text": "part one"},
                        {"type": "refusal", "refusal": "no"},
                        {"type": "output_text", "text": "part two"}
                    ]}
                ]
            }"#,
        );
        assert_eq!(extract_output_text(&response), "part one\npart two");
    }

    #[test]
    fn test_extract_empty_when_nothing_generated() {
        let response = parse(r#"{"output":[{"type":"message","content":[]}]}"#);
        assert_eq!(extract_output_text(&response), "");
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let client = OpenAiClient::new("http://127.0.0.1:9").unwrap();
        let request = CompletionRequest {
            api_key: "sk-aaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            model: "gpt-4.1-mini".to_string(),
            input: "hello".to_string(),
            max_output_tokens: 800,
            json_output: true,
        };

        let err = client.generate(request).await.unwrap_err();
        assert!(matches!(err, DocsumError::Network(_)));
    }
}
