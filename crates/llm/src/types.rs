use docsum_common::{SummaryLength, SummaryTone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fewest bullet points the prompt asks for
pub const MIN_BULLETS: usize = 3;

/// Most bullet points kept from a provider response
pub const MAX_BULLETS: usize = 7;

/// One completion call, independent of the backend
#[derive(Clone)]
pub struct CompletionRequest {
    /// Caller-supplied credential, forwarded as-is
    pub api_key: String,

    /// Model name (e.g., "gpt-4.1-mini")
    pub model: String,

    /// Full instruction text
    pub input: String,

    /// Maximum tokens to generate
    pub max_output_tokens: u32,

    /// Ask the provider for a JSON object
    pub json_output: bool,
}

impl fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("input_chars", &self.input.chars().count())
            .field("max_output_tokens", &self.max_output_tokens)
            .field("json_output", &self.json_output)
            .finish()
    }
}

/// Inputs of a single summarization
#[derive(Clone)]
pub struct SummarizeParams {
    pub api_key: String,
    pub content: String,
    pub length: SummaryLength,
    pub tone: SummaryTone,
}

impl fmt::Debug for SummarizeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizeParams")
            .field("api_key", &"<redacted>")
            .field("content_chars", &self.content.chars().count())
            .field("length", &self.length)
            .field("tone", &self.tone)
            .finish()
    }
}

/// Summarization result as returned by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Prose summary
    pub summary: String,

    /// Key points, in model order
    pub bullets: Vec<String>,
}

/// OpenAI Responses API request body
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResponsesRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TextOptions {
    pub format: TextFormat,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TextFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// OpenAI Responses API response body (only the fields we read)
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ResponsesResponse {
    /// Convenience field some SDKs and proxies populate
    #[serde(default)]
    pub output_text: Option<String>,

    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentPart {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub text: Option<String>,
}
