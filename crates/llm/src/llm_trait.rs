use crate::types::CompletionRequest;
use async_trait::async_trait;
use docsum_common::Result;

/// Common trait for completion backends
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one completion request and return the raw output text.
    ///
    /// An empty string means the provider produced no output.
    async fn generate(&self, request: CompletionRequest) -> Result<String>;
}
