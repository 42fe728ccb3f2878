use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summarize request as received, before validation
///
/// Fields stay untyped so a wrongly typed `apiKey` or `content` is reported
/// as the matching validation error instead of a generic body error.
#[derive(Debug, Default, Deserialize)]
pub struct RawSummarizeRequest {
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<Value>,

    #[serde(default)]
    pub content: Option<Value>,

    #[serde(default)]
    pub length: Option<Value>,

    #[serde(default)]
    pub tone: Option<Value>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}
