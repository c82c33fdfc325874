use serde::{Deserialize, Serialize};

/// Enhance request body
#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    /// Raw transcript text (or a Google Docs URL when Docs access is configured)
    #[serde(default)]
    pub transcript: Option<String>,
}

/// One enhancement, produced per template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementResult {
    /// Template title
    pub title: String,

    /// Generated text, or the processing error placeholder
    pub content: String,
}

impl EnhancementResult {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Enhance response
#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceResponse {
    /// Results in template order
    pub results: Vec<EnhancementResult>,
}

/// Template listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplatesResponse {
    /// Template titles in document order
    pub templates: Vec<String>,

    /// Number of templates
    pub count: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
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
