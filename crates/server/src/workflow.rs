use enhancer_common::{AppConfig, EnhancerError, Result};
use enhancer_llm::{enhancement_prompt, GenerateOptions, GenerateRequest, LlmClient};
use enhancer_templates::Template;
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::types::EnhancementResult;

/// Content returned for a template whose completion failed
pub const PROCESSING_ERROR: &str = "Error: Could not process this template.";

/// Runs every template against a transcript
///
/// All completion calls are in flight at once. Each call settles on its own:
/// a failure or timeout becomes [`PROCESSING_ERROR`] for that template only.
pub struct EnhancementWorkflow {
    client: Arc<dyn LlmClient>,
    model: String,
    options: Option<GenerateOptions>,
    call_timeout: Duration,
}

impl EnhancementWorkflow {
    /// Create new enhancement workflow
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>, call_timeout: Duration) -> Self {
        Self {
            client,
            model: model.into(),
            options: None,
            call_timeout,
        }
    }

    pub fn from_config(client: Arc<dyn LlmClient>, config: &AppConfig) -> Self {
        Self::new(client, &config.llm_model, config.llm_timeout())
            .with_options(GenerateOptions::from_config(config))
    }

    /// Generation options sent with every call
    pub fn with_options(mut self, options: Option<GenerateOptions>) -> Self {
        self.options = options;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &'static str {
        self.client.provider()
    }

    /// Enhance a transcript with every template
    ///
    /// Returns one result per template, in template order.
    pub async fn enhance(&self, transcript: &str, templates: &[Template]) -> Vec<EnhancementResult> {
        info!(
            "Starting enhancement - Templates: {}, Transcript length: {} chars, Provider: {}",
            templates.len(),
            transcript.len(),
            self.client.provider()
        );
        let started = Instant::now();

        let outcomes = join_all(
            templates
                .iter()
                .map(|template| self.run_template(template, transcript)),
        )
        .await;

        let mut failed = 0;
        let results: Vec<_> = templates
            .iter()
            .zip(outcomes)
            .map(|(template, outcome)| match outcome {
                Ok(content) => EnhancementResult::new(&template.title, content),
                Err(e) => {
                    warn!("Error processing template \"{}\": {}", template.title, e);
                    failed += 1;
                    EnhancementResult::new(&template.title, PROCESSING_ERROR)
                }
            })
            .collect();

        info!(
            "Enhancement finished in {:?} - Succeeded: {}, Failed: {}",
            started.elapsed(),
            results.len() - failed,
            failed
        );

        results
    }

    /// Single completion call, bounded by the call timeout
    async fn run_template(&self, template: &Template, transcript: &str) -> Result<String> {
        let request = GenerateRequest::new(
            &self.model,
            enhancement_prompt(&template.prompt, transcript),
        )
        .with_options(self.options.clone());
        debug!(
            "Running template \"{}\" - Prompt length: {}",
            template.title,
            request.prompt.len()
        );

        match tokio::time::timeout(self.call_timeout, self.client.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(EnhancerError::llm(format!(
                "completion timed out after {:?}",
                self.call_timeout
            ))),
        }
    }
}
