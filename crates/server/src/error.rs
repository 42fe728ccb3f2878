use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use docsum_common::{DocsumError, ErrorResponse};

/// Message returned for every provider-side failure
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to summarize content. Check your API key and try again.";

/// HTTP-facing wrapper around [`DocsumError`]
///
/// Client errors keep their message; everything else collapses into
/// [`GENERIC_FAILURE_MESSAGE`] so provider detail never leaves the server.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] DocsumError);

impl ApiError {
    pub fn invalid_body() -> Self {
        Self(DocsumError::invalid_input("Invalid request body"))
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match &self.0 {
            DocsumError::InvalidCredential | DocsumError::MissingContent => self.0.to_string(),
            DocsumError::InvalidInput(msg) | DocsumError::UnsupportedFormat(msg) => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.public_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_pass_through() {
        let err = ApiError::from(DocsumError::InvalidCredential);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid API key");

        let err = ApiError::from(DocsumError::MissingContent);
        assert_eq!(err.public_message(), "Missing content");

        let err = ApiError::invalid_body();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid request body");
    }

    #[test]
    fn test_provider_detail_is_hidden() {
        let err = ApiError::from(DocsumError::provider(
            "OpenAI API error (status 401 Unauthorized): Incorrect API key provided: sk-abc",
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERIC_FAILURE_MESSAGE);

        let err = ApiError::from(DocsumError::network("dns error"));
        assert_eq!(err.public_message(), GENERIC_FAILURE_MESSAGE);
    }
}
