//! Parsing of provider output into a [`Summary`]

use docsum_common::{DocsumError, Result};
use tracing::{debug, warn};

use crate::types::{Summary, MAX_BULLETS, MIN_BULLETS};

const FENCE: &str = "```";

/// Remove a markdown code fence wrapped around otherwise plain output.
///
/// Handles a leading fence with or without a language tag (```` ```json ````)
/// and a trailing fence. Text without fences is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        body = match rest.split_once('\n') {
            Some((first_line, remainder)) if is_language_tag(first_line.trim()) => remainder,
            Some(_) | None => strip_inline_tag(rest),
        };
    }

    body = body.trim_end();
    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest;
    }

    body.trim()
}

/// Drop a language tag sharing its line with the payload (```` ```json {...} ````)
fn strip_inline_tag(rest: &str) -> &str {
    let after_tag = rest.trim_start_matches(is_tag_char);
    if after_tag.starts_with(|c: char| c.is_whitespace() || c == '{' || c == '[') {
        after_tag.trim_start()
    } else {
        rest
    }
}

fn is_language_tag(s: &str) -> bool {
    s.chars().all(is_tag_char)
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '+'
}

/// Parse raw provider output into a summary.
///
/// Fails with `Provider("No response")` for empty output and
/// `Provider("Malformed response")` when the text is not the expected JSON.
pub fn parse_summary(raw: &str) -> Result<Summary> {
    if raw.trim().is_empty() {
        return Err(DocsumError::provider("No response"));
    }

    let body = strip_code_fence(raw);
    let parsed: Summary = serde_json::from_str(body).map_err(|e| {
        debug!("Provider output is not a summary object: {}", e);
        DocsumError::provider("Malformed response")
    })?;

    if parsed.summary.trim().is_empty() {
        debug!("Provider output has an empty summary field");
        return Err(DocsumError::provider("Malformed response"));
    }

    Ok(normalize(parsed))
}

fn normalize(summary: Summary) -> Summary {
    let mut bullets: Vec<String> = summary
        .bullets
        .into_iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect();

    if bullets.len() > MAX_BULLETS {
        debug!("Dropping {} bullets beyond the limit", bullets.len() - MAX_BULLETS);
        bullets.truncate(MAX_BULLETS);
    }
    if bullets.len() < MIN_BULLETS {
        warn!("Provider returned only {} bullet points", bullets.len());
    }

    Summary {
        summary: summary.summary.trim().to_string(),
        bullets,
    }
}
