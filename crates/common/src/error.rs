/// Enhancer error types
#[derive(Debug, thiserror::Error)]
pub enum EnhancerError {
    /// LLM related error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Template document could not be read
    #[error("Failed to read template source: {0}")]
    TemplateSource(String),

    /// Google Doc could not be fetched
    #[error("{0}")]
    DocumentFetch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("{0}")]
    InvalidInput(String),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnhancerError {
    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create template source error
    pub fn template_source<S: Into<String>>(msg: S) -> Self {
        Self::TemplateSource(msg.into())
    }

    /// Create document fetch error
    pub fn document_fetch<S: Into<String>>(msg: S) -> Self {
        Self::DocumentFetch(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

// HTTP response conversion (used by the actix-web layer)
impl EnhancerError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::TemplateSource(_) => 500,
            Self::DocumentFetch(_) => 500,
            Self::Config(_) => 500,
            Self::Llm(_) => 500,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(EnhancerError::invalid_input("Missing transcript").status_code(), 400);
        assert_eq!(EnhancerError::template_source("gone").status_code(), 500);
        assert_eq!(EnhancerError::document_fetch("unreachable").status_code(), 500);
    }

    #[test]
    fn test_display_messages() {
        let err = EnhancerError::invalid_input("Missing transcript");
        assert_eq!(err.to_string(), "Missing transcript");

        let err = EnhancerError::template_source("No such file or directory");
        assert_eq!(
            err.to_string(),
            "Failed to read template source: No such file or directory"
        );

        let err = EnhancerError::document_fetch("Failed to fetch content from Google Doc.");
        assert_eq!(err.to_string(), "Failed to fetch content from Google Doc.");
    }
}
