//! Plain-text rendering of the form for the terminal

use docsum_common::text::group_thousands;
use docsum_common::SummarizeResponse;

use crate::state::{FormState, Phase, PREVIEW_LENGTH};

/// Loaded file name plus the capped content preview
pub fn render_preview(state: &FormState) -> String {
    let mut out = String::new();
    if let Some(name) = &state.file_name {
        out.push_str(&format!("Loaded: {}\n", name));
    }
    if state.content.is_empty() {
        out.push_str("Upload a file to see a preview\n");
        return out;
    }

    out.push_str(&format!(
        "--- Preview (first {} characters) ---\n",
        group_thousands(PREVIEW_LENGTH)
    ));
    out.push_str(state.preview());
    if !state.preview().ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n");
    out
}

/// Summary paragraphs, key points and the original size
pub fn render_result(result: &SummarizeResponse) -> String {
    let mut out = format!(
        "Summary (original: {} characters)\n\n",
        group_thousands(result.original_characters)
    );

    let paragraphs: Vec<&str> = result
        .summary
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    out.push_str(&paragraphs.join("\n\n"));
    out.push('\n');

    if !result.bullets.is_empty() {
        out.push_str("\nKey points\n");
        for bullet in &result.bullets {
            out.push_str(&format!("  • {}\n", bullet));
        }
    }
    out
}

/// Render whatever the current phase calls for
pub fn render_state(state: &FormState) -> String {
    match state.phase() {
        Phase::Idle => "Select a .txt or .md file to get started.\n".to_string(),
        Phase::FileLoaded => render_preview(state),
        Phase::Submitting => "Summarizing...\n".to_string(),
        Phase::Succeeded => match &state.result {
            Some(result) => render_result(result),
            None => String::new(),
        },
        Phase::Failed => format!(
            "Request error: {}\n",
            state.error.as_deref().unwrap_or_default()
        ),
    }
}
