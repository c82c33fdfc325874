use async_trait::async_trait;
use enhancer_common::{EnhancerError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{GenerateRequest, OllamaGenerateRequest, OllamaGenerateResponse};

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama client initialized: {}", base_url);
        Ok(Self { base_url, client })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let body = OllamaGenerateRequest {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
            options: request.options.as_ref(),
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| EnhancerError::llm(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| EnhancerError::llm(format!("Ollama API error: {}", e)))?;

        let result: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| EnhancerError::llm(format!("Failed to parse response: {}", e)))?;

        if result.response.trim().is_empty() {
            return Err(EnhancerError::llm("Empty response from Ollama"));
        }

        debug!(
            "Received response from Ollama - Length: {}, Done: {}",
            result.response.len(),
            result.done
        );

        Ok(result.response)
    }

    fn provider(&self) -> &'static str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenerateOptions;

    #[test]
    fn test_generate_url_strips_trailing_slash() {
        let client = OllamaClient::new("http://localhost:11434/").unwrap();
        assert_eq!(client.generate_url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_request_body_disables_streaming() {
        let options = GenerateOptions {
            temperature: Some(0.5),
            ..GenerateOptions::default()
        };
        let body = OllamaGenerateRequest {
            model: "llama3.2",
            prompt: "Say hi",
            stream: false,
            options: Some(&options),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["options"]["temperature"], 0.5);
        assert!(json["options"].get("num_predict").is_none());
    }

    #[test]
    fn test_parse_response() {
        let json = r#"{"model":"llama3.2","response":"Hello","done":true,"context":[1,2]}"#;
        let parsed: OllamaGenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response, "Hello");
        assert!(parsed.done);
    }
}
