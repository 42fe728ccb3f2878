//! Summarizer form state machine
//!
//! All form data lives in one [`FormState`]. Inputs arrive as [`Msg`] values
//! and go through [`FormState::update`], which may hand back a [`Command`]
//! for the caller to execute (the only one is sending the request).

use docsum_common::text::truncate_chars;
use docsum_common::{SummarizeRequest, SummarizeResponse, SummaryLength, SummaryTone};

/// Characters of loaded content shown in the preview
pub const PREVIEW_LENGTH: usize = 1200;

/// Where the form currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileLoaded,
    Submitting,
    Succeeded,
    Failed,
}

/// User actions and request outcomes
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A file was read successfully
    FileLoaded { name: String, content: String },
    /// Reading a file failed locally
    FileFailed(String),
    ApiKeyChanged(String),
    LengthChanged(SummaryLength),
    ToneChanged(SummaryTone),
    SubmitRequested,
    SubmitSucceeded(SummarizeResponse),
    SubmitFailed(String),
}

/// Side effects requested by an update
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Submit(SummarizeRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub file_name: Option<String>,
    pub content: String,
    pub api_key: String,
    pub length: SummaryLength,
    pub tone: SummaryTone,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<SummarizeResponse>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if self.result.is_some() {
            Phase::Succeeded
        } else if self.error.is_some() {
            Phase::Failed
        } else if !self.content.is_empty() {
            Phase::FileLoaded
        } else {
            Phase::Idle
        }
    }

    /// Submission needs a key, some content and no request in flight
    pub fn can_submit(&self) -> bool {
        !self.api_key.is_empty() && !self.content.is_empty() && !self.loading
    }

    /// First [`PREVIEW_LENGTH`] characters of the loaded content
    pub fn preview(&self) -> &str {
        truncate_chars(&self.content, PREVIEW_LENGTH).0
    }

    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::FileLoaded { name, content } => {
                self.file_name = Some(name);
                self.content = content;
                self.error = None;
                self.result = None;
                None
            }
            Msg::FileFailed(message) => {
                self.file_name = None;
                self.content.clear();
                self.error = Some(message);
                self.result = None;
                None
            }
            Msg::ApiKeyChanged(key) => {
                self.api_key = key;
                None
            }
            Msg::LengthChanged(length) => {
                self.length = length;
                None
            }
            Msg::ToneChanged(tone) => {
                self.tone = tone;
                None
            }
            Msg::SubmitRequested => {
                if !self.can_submit() {
                    return None;
                }
                self.error = None;
                self.result = None;
                self.loading = true;
                Some(Command::Submit(SummarizeRequest {
                    api_key: self.api_key.clone(),
                    content: self.content.clone(),
                    length: Some(self.length),
                    tone: Some(self.tone),
                }))
            }
            Msg::SubmitSucceeded(response) => {
                self.loading = false;
                self.result = Some(response);
                None
            }
            Msg::SubmitFailed(message) => {
                self.loading = false;
                self.error = Some(message);
                None
            }
        }
    }
}
