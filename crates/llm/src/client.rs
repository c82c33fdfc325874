use enhancer_common::{AppConfig, EnhancerError, LlmProvider, Result};
use std::sync::Arc;

use crate::gemini::GeminiClient;
use crate::llm_trait::LlmClient;
use crate::ollama::OllamaClient;

/// Build the completion client named by the configuration
pub fn build_client(config: &AppConfig) -> Result<Arc<dyn LlmClient>> {
    match config.llm_provider {
        LlmProvider::Gemini => {
            let api_key = config.gemini_api_key.as_deref().ok_or_else(|| {
                EnhancerError::config("Gemini API key is missing. Set GEMINI_API_KEY.")
            })?;
            Ok(Arc::new(GeminiClient::new(api_key, &config.gemini_endpoint)?))
        }
        LlmProvider::Ollama => Ok(Arc::new(OllamaClient::new(&config.ollama_base_url)?)),
    }
}
