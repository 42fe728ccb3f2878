//! Wire types shared by the endpoint and the form client

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested summary length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!("unknown summary length '{}'", other)),
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested summary tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    #[default]
    Neutral,
    Friendly,
    Formal,
}

impl SummaryTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
        }
    }
}

impl FromStr for SummaryTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neutral" => Ok(Self::Neutral),
            "friendly" => Ok(Self::Friendly),
            "formal" => Ok(Self::Formal),
            other => Err(format!("unknown summary tone '{}'", other)),
        }
    }
}

impl fmt::Display for SummaryTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /summarize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub api_key: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<SummaryLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<SummaryTone>,
}

/// Successful response of `POST /summarize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub bullets: Vec<String>,
    /// Length of the submitted content before any truncation
    pub original_characters: usize,
}

/// Error body returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_endpoint_defaults() {
        assert_eq!(SummaryLength::default(), SummaryLength::Medium);
        assert_eq!(SummaryTone::default(), SummaryTone::Neutral);
    }

    #[test]
    fn test_parse_options_case_insensitive() {
        assert_eq!("SHORT".parse::<SummaryLength>(), Ok(SummaryLength::Short));
        assert_eq!(" formal ".parse::<SummaryTone>(), Ok(SummaryTone::Formal));
        assert!("tiny".parse::<SummaryLength>().is_err());
        assert!("angry".parse::<SummaryTone>().is_err());
    }

    #[test]
    fn test_request_uses_camel_case_keys() {
        let request = SummarizeRequest {
            api_key: "sk-test".to_string(),
            content: "hello".to_string(),
            length: Some(SummaryLength::Long),
            tone: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["apiKey"], "sk-test");
        assert_eq!(json["length"], "long");
        assert!(json.get("tone").is_none());
    }

    #[test]
    fn test_response_field_names() {
        let body = r#"{"summary":"S","bullets":["a","b"],"originalCharacters":1300}"#;
        let response: SummarizeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.original_characters, 1300);
        assert_eq!(response.bullets, vec!["a", "b"]);
    }
}
