//! docsum LLM integration
//!
//! OpenAI Responses API client and document summarization

mod client;
mod llm_trait;
mod parse;
mod prompts;
mod summarize;
mod types;

pub use client::OpenAiClient;
pub use llm_trait::LlmClient;
pub use parse::{parse_summary, strip_code_fence};
pub use prompts::{build_prompt, length_guidance, PROMPT_PREAMBLE};
pub use summarize::Summarizer;
pub use types::{CompletionRequest, SummarizeParams, Summary, MAX_BULLETS, MIN_BULLETS};
