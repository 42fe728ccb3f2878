use crate::error::DocsumError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log file written inside the configured log directory
pub const LOG_FILE_NAME: &str = "docsum.log";

/// docsum application configuration
///
/// The provider credential is deliberately absent: it arrives with every
/// request and is never read from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Completion provider base URL
    pub openai_base_url: String,

    /// Model used for summarization
    pub llm_model: String,

    /// Cap on generated tokens per summary
    pub max_output_tokens: u32,

    /// Characters forwarded to the provider before truncation kicks in
    pub max_input_chars: usize,

    /// Optional limit on how long a provider call may take
    pub provider_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            openai_base_url: "https://api.openai.com".to_string(),
            llm_model: "gpt-4.1-mini".to_string(),
            max_output_tokens: 800,
            max_input_chars: 50_000,
            provider_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, DocsumError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT").unwrap_or(defaults.server_port),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url),
            llm_model: std::env::var("LLM_MODEL").unwrap_or(defaults.llm_model),
            max_output_tokens: Self::get_env_parsed("MAX_OUTPUT_TOKENS")
                .unwrap_or(defaults.max_output_tokens),
            max_input_chars: Self::get_env_parsed("MAX_INPUT_CHARS")
                .unwrap_or(defaults.max_input_chars),
            provider_timeout_secs: Self::get_env_parsed("PROVIDER_TIMEOUT_SECS"),
        };

        config.validate()?;
        config.ensure_directories()?;

        Ok(config)
    }

    /// Parse an environment variable, ignoring unset or unparsable values
    fn get_env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), DocsumError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                DocsumError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Server log file inside `log_dir`
    pub fn get_log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DocsumError> {
        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            return Err(DocsumError::config(
                "OpenAI base URL must start with http:// or https://",
            ));
        }

        if self.llm_model.trim().is_empty() {
            return Err(DocsumError::config("LLM model name cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(DocsumError::config("Server port cannot be 0"));
        }

        if self.max_output_tokens == 0 || self.max_input_chars == 0 {
            return Err(DocsumError::config(
                "Token and character limits must be greater than 0",
            ));
        }

        if self.provider_timeout_secs == Some(0) {
            return Err(DocsumError::config("Provider timeout cannot be 0"));
        }

        Ok(())
    }
}
