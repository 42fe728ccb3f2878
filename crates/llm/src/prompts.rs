//! Prompt templates for summarization

use docsum_common::{SummaryLength, SummaryTone};

use crate::types::{MAX_BULLETS, MIN_BULLETS};

/// Fixed opening of every summarization prompt
pub const PROMPT_PREAMBLE: &str = "You are a summarization assistant.";

/// Delimiter wrapped around the document so it cannot be read as instructions
const CONTENT_DELIMITER: &str = "\"\"\"";

/// Length guideline for the requested summary size
pub fn length_guidance(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Short => "3-4 concise sentences",
        SummaryLength::Medium => "1-2 paragraphs",
        SummaryLength::Long => "3-4 paragraphs with detail",
    }
}

/// Build the single instruction sent to the provider
pub fn build_prompt(content: &str, length: SummaryLength, tone: SummaryTone) -> String {
    format!(
        "{preamble}\n\
         Return JSON with keys: summary (string) and bullets (array of strings with {min}-{max} bullet points).\n\
         Use a {tone} tone and keep the summary to {guidance}.\n\
         Focus on the most important information without adding extra commentary.\n\
         \n\
         Content to summarize:\n\
         {delim}\n\
         {content}\n\
         {delim}",
        preamble = PROMPT_PREAMBLE,
        min = MIN_BULLETS,
        max = MAX_BULLETS,
        tone = tone,
        guidance = length_guidance(length),
        delim = CONTENT_DELIMITER,
        content = content,
    )
}
