pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod text;

// Re-export commonly used types
pub use api::{ErrorResponse, SummarizeRequest, SummarizeResponse, SummaryLength, SummaryTone};
pub use config::AppConfig;
pub use error::DocsumError;
pub type Result<T> = std::result::Result<T, DocsumError>;
