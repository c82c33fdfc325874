use crate::error::EnhancerError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default Gemini REST endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Completion backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    Ollama,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = EnhancerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            other => Err(EnhancerError::config(format!(
                "Unsupported LLM_PROVIDER '{}'. Supported providers: gemini, ollama",
                other
            ))),
        }
    }
}

/// Transcript enhancer configuration
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

    /// Template library location: a file path or a Google Docs URL
    pub template_source: String,

    /// Completion backend
    pub llm_provider: LlmProvider,

    /// Model used for every enhancement call
    pub llm_model: String,

    /// Gemini API key
    #[serde(skip_serializing)]
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL
    pub gemini_endpoint: String,

    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Google API key for reading Google Docs
    #[serde(skip_serializing)]
    pub google_api_key: Option<String>,

    /// Per completion call timeout in seconds
    pub llm_timeout_secs: u64,

    /// Sampling temperature, backend default when unset
    pub llm_temperature: Option<f32>,

    /// Output token limit, backend default when unset
    pub llm_max_tokens: Option<i32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            template_source: "./templates/library.md".to_string(),
            llm_provider: LlmProvider::Gemini,
            llm_model: "gemini-2.5-flash".to_string(),
            gemini_api_key: None,
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            ollama_base_url: "http://localhost:11434".to_string(),
            google_api_key: None,
            llm_timeout_secs: 120,
            llm_temperature: None,
            llm_max_tokens: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, EnhancerError> {
        let config = Self::read_env()?;

        config.validate()?;

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Read environment variables without validating them
    ///
    /// Used by commands that never reach the completion backend.
    pub fn read_env() -> Result<Self, EnhancerError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let llm_provider = match std::env::var("LLM_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.llm_provider,
        };

        let config = Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT")?.unwrap_or(defaults.server_port),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            template_source: std::env::var("TEMPLATE_SOURCE")
                .unwrap_or(defaults.template_source),
            llm_provider,
            llm_model: std::env::var("LLM_MODEL").unwrap_or(defaults.llm_model),
            gemini_api_key: Self::get_env_secret("GEMINI_API_KEY"),
            gemini_endpoint: std::env::var("GEMINI_ENDPOINT")
                .unwrap_or(defaults.gemini_endpoint),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or(defaults.ollama_base_url),
            google_api_key: Self::get_env_secret("GOOGLE_API_KEY"),
            llm_timeout_secs: Self::get_env_parsed("LLM_TIMEOUT_SECS")?
                .unwrap_or(defaults.llm_timeout_secs),
            llm_temperature: Self::get_env_parsed("LLM_TEMPERATURE")?,
            llm_max_tokens: Self::get_env_parsed("LLM_MAX_TOKENS")?,
        };

        Ok(config)
    }

    /// Parse an optional environment variable, rejecting malformed values
    fn get_env_parsed<T>(key: &str) -> Result<Option<T>, EnhancerError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match std::env::var(key) {
            Ok(value) if !value.trim().is_empty() => Self::parse_value(key, &value).map(Some),
            _ => Ok(None),
        }
    }

    fn parse_value<T>(key: &str, value: &str) -> Result<T, EnhancerError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        value.trim().parse().map_err(|e| {
            EnhancerError::config(format!("Invalid {} value '{}': {}", key, value, e))
        })
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get a non-blank secret from environment variable
    fn get_env_secret(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Ensure the log directory exists, create if not
    pub fn ensure_directories(&self) -> Result<(), EnhancerError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                EnhancerError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Per completion call timeout
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Whether the template source points at a Google Doc
    pub fn template_source_is_google_doc(&self) -> bool {
        self.template_source.contains("docs.google.com/document/")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), EnhancerError> {
        if self.llm_model.trim().is_empty() {
            return Err(EnhancerError::config("LLM model name cannot be empty"));
        }

        match self.llm_provider {
            LlmProvider::Gemini => {
                if self.gemini_api_key.is_none() {
                    return Err(EnhancerError::config(
                        "Missing GEMINI_API_KEY. Set it in the environment or .env file",
                    ));
                }
                Self::validate_url("GEMINI_ENDPOINT", &self.gemini_endpoint)?;
            }
            LlmProvider::Ollama => {
                Self::validate_url("OLLAMA_BASE_URL", &self.ollama_base_url)?;
            }
        }

        if self.template_source.trim().is_empty() {
            return Err(EnhancerError::config("TEMPLATE_SOURCE cannot be empty"));
        }

        if self.template_source_is_google_doc() && self.google_api_key.is_none() {
            return Err(EnhancerError::config(
                "Missing GOOGLE_API_KEY. It is required to read a Google Docs template source",
            ));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(EnhancerError::config("Server port cannot be 0"));
        }

        if self.llm_timeout_secs == 0 {
            return Err(EnhancerError::config("LLM_TIMEOUT_SECS must be greater than 0"));
        }

        if let Some(temperature) = self.llm_temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(EnhancerError::config(
                    "LLM_TEMPERATURE must be between 0.0 and 2.0",
                ));
            }
        }

        if matches!(self.llm_max_tokens, Some(tokens) if tokens <= 0) {
            return Err(EnhancerError::config("LLM_MAX_TOKENS must be greater than 0"));
        }

        Ok(())
    }

    fn validate_url(key: &str, url: &str) -> Result<(), EnhancerError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(EnhancerError::config(format!(
                "{} must start with http:// or https://",
                key
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gemini_config() -> AppConfig {
        AppConfig {
            gemini_api_key: Some("test-key".to_string()),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.llm_provider, LlmProvider::Gemini);
        assert_eq!(config.llm_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate() {
        assert!(gemini_config().validate().is_ok());

        let mut invalid_config = gemini_config();
        invalid_config.llm_model = String::new();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = gemini_config();
        invalid_config.llm_timeout_secs = 0;
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_gemini_requires_api_key() {
        let err = AppConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_ollama_does_not_require_gemini_key() {
        let config = AppConfig {
            llm_provider: LlmProvider::Ollama,
            llm_model: "llama3.2:latest".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = AppConfig {
            ollama_base_url: "localhost:11434".to_string(),
            ..config
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_google_doc_source_requires_google_key() {
        let mut config = gemini_config();
        config.template_source =
            "https://docs.google.com/document/d/abc123/edit".to_string();
        assert!(config.template_source_is_google_doc());
        assert!(config.validate().is_err());

        config.google_api_key = Some("google-key".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_numbers_are_rejected() {
        let err = AppConfig::parse_value::<u16>("SERVER_PORT", "80a").unwrap_err();
        assert!(matches!(err, EnhancerError::Config(_)));
        assert!(err.to_string().contains("Invalid SERVER_PORT value '80a'"));

        assert!(AppConfig::parse_value::<u16>("SERVER_PORT", "70000").is_err());
        assert!(AppConfig::parse_value::<u64>("LLM_TIMEOUT_SECS", "-5").is_err());
        assert!(AppConfig::parse_value::<f32>("LLM_TEMPERATURE", "warm").is_err());

        assert_eq!(AppConfig::parse_value::<u64>("LLM_TIMEOUT_SECS", " 30 ").unwrap(), 30);
    }

    #[test]
    fn test_malformed_env_value_fails_read() {
        // Only this test touches LLM_MAX_TOKENS
        std::env::set_var("LLM_MAX_TOKENS", "lots");
        let result = AppConfig::get_env_parsed::<i32>("LLM_MAX_TOKENS");
        std::env::remove_var("LLM_MAX_TOKENS");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("LLM_MAX_TOKENS"));
        assert!(AppConfig::get_env_parsed::<i32>("LLM_MAX_TOKENS").unwrap().is_none());
    }

    #[test]
    fn test_generation_limits() {
        let mut config = gemini_config();
        config.llm_temperature = Some(0.4);
        config.llm_max_tokens = Some(1024);
        assert!(config.validate().is_ok());

        config.llm_temperature = Some(3.5);
        assert!(config.validate().is_err());

        config.llm_temperature = None;
        config.llm_max_tokens = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_provider() {
        assert_eq!("Gemini".parse::<LlmProvider>().unwrap(), LlmProvider::Gemini);
        assert_eq!(" ollama ".parse::<LlmProvider>().unwrap(), LlmProvider::Ollama);
        assert!("openai".parse::<LlmProvider>().is_err());
    }
}
