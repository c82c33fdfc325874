use async_trait::async_trait;
use enhancer_common::{EnhancerError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{GenerateOptions, GenerateRequest};

/// Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(EnhancerError::config(
                "Gemini API key is missing. Set GEMINI_API_KEY.",
            ));
        }

        let endpoint = endpoint.into().trim().trim_end_matches('/').to_string();

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build Gemini HTTP client: {}", e))?;

        info!("Gemini client initialized: {}", endpoint);
        Ok(Self {
            http,
            api_key,
            endpoint,
        })
    }

    fn request_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        debug!(
            "Sending generateContent request to Gemini - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: request.prompt,
                }],
            }],
            generation_config: request.options.as_ref().map(GeminiGenerationConfig::from),
        };

        let response = self
            .http
            .post(self.request_url(&request.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| EnhancerError::llm(format!("Gemini request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| EnhancerError::llm(format!("Gemini returned an error status: {}", e)))?;

        let payload: GeminiGenerateContentResponse = response
            .json()
            .await
            .map_err(|e| EnhancerError::llm(format!("Failed to parse Gemini response: {}", e)))?;

        let text = payload
            .first_text()
            .ok_or_else(|| EnhancerError::llm("Gemini response did not contain any text"))?;

        debug!("Received response from Gemini - Length: {}", text.len());
        Ok(text)
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateContentRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<i32>,
}

impl From<&GenerateOptions> for GeminiGenerationConfig {
    fn from(options: &GenerateOptions) -> Self {
        Self {
            temperature: options.temperature,
            max_output_tokens: options.num_predict,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

impl GeminiGenerateContentResponse {
    /// Text of the first candidate that has any
    fn first_text(&self) -> Option<String> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .find(|text| !text.trim().is_empty())
    }
}
