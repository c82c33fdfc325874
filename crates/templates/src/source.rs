use async_trait::async_trait;
use enhancer_common::{AppConfig, EnhancerError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::google_docs::{GoogleDocSource, GoogleDocsClient};

/// Provides the full text of the template document
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Read the whole document
    async fn load(&self) -> Result<String>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

/// Template document stored on the local filesystem
///
/// The file is read again on every load so edits apply to the next request.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    async fn load(&self) -> Result<String> {
        debug!("Reading template file: {}", self.path.display());

        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            EnhancerError::template_source(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Build the template source named by `TEMPLATE_SOURCE`
///
/// A Google Docs URL selects the Docs API, anything else is a file path.
pub fn build_source(config: &AppConfig) -> Result<Arc<dyn TemplateSource>> {
    let source: Arc<dyn TemplateSource> = if config.template_source_is_google_doc() {
        let api_key = config.google_api_key.clone().ok_or_else(|| {
            EnhancerError::config("GOOGLE_API_KEY is required for a Google Docs template source")
        })?;
        let client = GoogleDocsClient::new(api_key)?;
        Arc::new(GoogleDocSource::from_url(client, &config.template_source)?)
    } else {
        Arc::new(FileTemplateSource::new(&config.template_source))
    };

    info!("Template source: {}", source.describe());
    Ok(source)
}
