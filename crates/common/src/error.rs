/// docsum error types
#[derive(Debug, thiserror::Error)]
pub enum DocsumError {
    /// API key missing or not shaped like a provider key
    #[error("Invalid API key")]
    InvalidCredential,

    /// Document content missing or empty
    #[error("Missing content")]
    MissingContent,

    /// File extension not accepted by the loader
    #[error("{0}")]
    UnsupportedFormat(String),

    /// Completion provider failure (empty or malformed output, bad status)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocsumError {
    /// Create unsupported format error
    pub fn unsupported_format<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        Self::Provider(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_client_error(&self) -> bool {
        self.status_code() == 400
    }
}

// HTTP response conversion
impl DocsumError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredential => 400,
            Self::MissingContent => 400,
            Self::InvalidInput(_) => 400,
            Self::UnsupportedFormat(_) => 400,
            Self::Provider(_) => 500,
            Self::Config(_) => 500,
            Self::Network(_) => 500,
            Self::Io(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        assert_eq!(DocsumError::InvalidCredential.status_code(), 400);
        assert_eq!(DocsumError::MissingContent.status_code(), 400);
        assert!(DocsumError::invalid_input("bad body").is_client_error());
    }

    #[test]
    fn test_provider_failures_are_server_errors() {
        assert_eq!(DocsumError::provider("No response").status_code(), 500);
        assert_eq!(DocsumError::network("connection refused").status_code(), 500);
        assert!(!DocsumError::provider("Malformed response").is_client_error());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(DocsumError::InvalidCredential.to_string(), "Invalid API key");
        assert_eq!(DocsumError::MissingContent.to_string(), "Missing content");
        assert_eq!(
            DocsumError::unsupported_format("Only .txt files").to_string(),
            "Only .txt files"
        );
    }
}
