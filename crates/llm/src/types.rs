use enhancer_common::AppConfig;
use serde::{Deserialize, Serialize};

/// Completion request shared by every backend
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name (e.g., "gemini-2.5-flash", "llama3.2")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Option<GenerateOptions>) -> Self {
        self.options = options;
        self
    }
}

/// Generation options
#[derive(Debug, Clone, Serialize, Default)]
pub struct GenerateOptions {
    /// Temperature (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
}

impl GenerateOptions {
    /// Options set through `LLM_TEMPERATURE` and `LLM_MAX_TOKENS`
    ///
    /// `None` when neither is set, so backends keep their defaults.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        if config.llm_temperature.is_none() && config.llm_max_tokens.is_none() {
            return None;
        }

        Some(Self {
            temperature: config.llm_temperature,
            num_predict: config.llm_max_tokens,
        })
    }
}

/// Ollama generate request body
#[derive(Debug, Serialize)]
pub(crate) struct OllamaGenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a GenerateOptions>,
}

/// Ollama generate response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OllamaGenerateResponse {
    /// Generated text
    pub response: String,

    /// Whether generation is complete
    #[serde(default)]
    pub done: bool,
}
