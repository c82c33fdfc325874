use enhancer_common::{AppConfig, Result};
use enhancer_llm::{build_client, LlmClient};
use enhancer_templates::{build_source, parse_templates, GoogleDocsClient, Template, TemplateSource};
use std::sync::Arc;
use tracing::debug;

use crate::workflow::EnhancementWorkflow;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Template document provider
    pub templates: Arc<dyn TemplateSource>,

    /// Google Docs access for transcripts given as document URLs
    pub docs: Option<GoogleDocsClient>,

    /// Enhancement workflow
    pub workflow: EnhancementWorkflow,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = build_client(&config)?;
        let templates = build_source(&config)?;
        let docs = config
            .google_api_key
            .as_deref()
            .map(GoogleDocsClient::new)
            .transpose()?;

        Ok(Self::with_parts(config, client, templates, docs))
    }

    /// Assemble state from already built collaborators
    pub fn with_parts(
        config: AppConfig,
        client: Arc<dyn LlmClient>,
        templates: Arc<dyn TemplateSource>,
        docs: Option<GoogleDocsClient>,
    ) -> Self {
        let workflow = EnhancementWorkflow::from_config(client, &config);
        Self {
            config,
            templates,
            docs,
            workflow,
        }
    }

    /// Read and parse the template document
    pub async fn load_templates(&self) -> Result<Vec<Template>> {
        let document = self.templates.load().await?;
        let templates = parse_templates(&document);
        debug!(
            "Parsed {} templates from {} ({} chars)",
            templates.len(),
            self.templates.describe(),
            document.len()
        );
        Ok(templates)
    }
}
