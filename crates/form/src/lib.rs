//! docsum form
//!
//! Local file loading and the summarizer form state machine, plus the HTTP
//! client the form uses to reach the summarize endpoint.

pub mod client;
pub mod loader;
pub mod render;
pub mod state;

pub use client::EndpointClient;
pub use loader::{decode_file, read_file_content};
pub use state::{Command, FormState, Msg, Phase, PREVIEW_LENGTH};
