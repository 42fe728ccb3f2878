use actix_web::{post, web, HttpResponse};
use docsum_common::text::{group_thousands, truncate_chars};
use docsum_common::{DocsumError, Result, SummarizeResponse, SummaryLength, SummaryTone};
use docsum_llm::SummarizeParams;
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::RawSummarizeRequest;

/// Prefix every provider key starts with
pub const API_KEY_PREFIX: &str = "sk-";

/// A key must be strictly longer than this
pub const MIN_API_KEY_LENGTH: usize = 20;

#[post("/summarize")]
pub async fn summarize(
    req: web::Json<RawSummarizeRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> std::result::Result<HttpResponse, ApiError> {
    match run_summarize(&state, req.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) if e.is_client_error() => {
            warn!("Rejected summarize request: {}", e);
            Err(e.into())
        }
        Err(e) => {
            error!("Summarization error: {}", e);
            Err(e.into())
        }
    }
}

/// Validate, truncate, summarize and shape the response
pub async fn run_summarize(
    state: &AppState,
    req: RawSummarizeRequest,
) -> Result<SummarizeResponse> {
    let api_key = validate_api_key(req.api_key.as_ref())?;
    let content = validate_content(req.content.as_ref())?;
    let length: SummaryLength = parse_option(req.length.as_ref(), "length");
    let tone: SummaryTone = parse_option(req.tone.as_ref(), "tone");

    let max_chars = state.config.max_input_chars;
    let original_characters = content.chars().count();
    let (working_content, truncated) = truncate_chars(content, max_chars);
    if truncated {
        info!(
            "Content truncated from {} to {} characters",
            original_characters, max_chars
        );
    }

    let params = SummarizeParams {
        api_key: api_key.to_string(),
        content: working_content.to_string(),
        length,
        tone,
    };

    let call = state.summarizer.summarize(params);
    let result = match state.config.provider_timeout_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), call)
            .await
            .map_err(|_| {
                DocsumError::provider(format!("Provider call timed out after {}s", secs))
            })??,
        None => call.await?,
    };

    let summary = if truncated {
        format!("{}\n\n{}", result.summary, truncation_notice(max_chars))
    } else {
        result.summary
    };

    Ok(SummarizeResponse {
        summary,
        bullets: result.bullets,
        original_characters,
    })
}

/// Accept only strings shaped like a provider key
pub fn validate_api_key(value: Option<&Value>) -> Result<&str> {
    match value {
        Some(Value::String(key))
            if key.starts_with(API_KEY_PREFIX) && key.chars().count() > MIN_API_KEY_LENGTH =>
        {
            Ok(key.as_str())
        }
        _ => Err(DocsumError::InvalidCredential),
    }
}

/// Accept only non-empty strings
pub fn validate_content(value: Option<&Value>) -> Result<&str> {
    match value {
        Some(Value::String(content)) if !content.is_empty() => Ok(content.as_str()),
        _ => Err(DocsumError::MissingContent),
    }
}

/// Parse an optional enum field, falling back to its default
fn parse_option<T>(value: Option<&Value>, field: &str) -> T
where
    T: FromStr + Default,
{
    match value {
        None | Some(Value::Null) => T::default(),
        Some(Value::String(s)) => s.parse().unwrap_or_else(|_| {
            warn!("Unknown {} '{}', using default", field, s);
            T::default()
        }),
        Some(other) => {
            warn!("Ignoring non-string {}: {}", field, other);
            T::default()
        }
    }
}

/// Sentence appended to summaries of truncated input
pub fn truncation_notice(max_chars: usize) -> String {
    format!(
        "Note: Input truncated to the first {} characters.",
        group_thousands(max_chars)
    )
}
