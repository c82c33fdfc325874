use async_trait::async_trait;
use enhancer_common::{EnhancerError, Result};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::{debug, error};

use crate::source::TemplateSource;

const DOCS_API_ENDPOINT: &str = "https://docs.googleapis.com/v1/documents";

/// Message returned when a document cannot be fetched
pub const FETCH_ERROR: &str =
    "Failed to fetch content from Google Doc. Please ensure it's public and the URL is correct.";

fn doc_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"/document/d/([a-zA-Z0-9_-]+)").expect("valid Google Doc id pattern")
    })
}

/// Extract the document id from a Google Docs URL
pub fn extract_google_doc_id(url: &str) -> Option<&str> {
    doc_id_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Google Docs REST client (API key auth, public documents only)
#[derive(Debug, Clone)]
pub struct GoogleDocsClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleDocsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: DOCS_API_ENDPOINT.to_string(),
        })
    }

    /// Override the API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetch the plain text of a document
    pub async fn fetch_text(&self, doc_id: &str) -> Result<String> {
        let url = format!("{}/{}", self.endpoint, doc_id);
        debug!("Fetching Google Doc: {}", doc_id);

        let document: DocsDocument = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Self::fetch_error(doc_id, e))?
            .json()
            .await
            .map_err(|e| Self::fetch_error(doc_id, e))?;

        Ok(document.plain_text())
    }

    fn fetch_error(doc_id: &str, e: reqwest::Error) -> EnhancerError {
        error!("Error fetching Google Doc (ID: {}): {}", doc_id, e);
        EnhancerError::document_fetch(FETCH_ERROR)
    }
}

/// Template document stored in a Google Doc
#[derive(Debug, Clone)]
pub struct GoogleDocSource {
    client: GoogleDocsClient,
    doc_id: String,
}

impl GoogleDocSource {
    pub fn new(client: GoogleDocsClient, doc_id: impl Into<String>) -> Self {
        Self {
            client,
            doc_id: doc_id.into(),
        }
    }

    /// Build from a document URL
    pub fn from_url(client: GoogleDocsClient, url: &str) -> Result<Self> {
        let doc_id = extract_google_doc_id(url)
            .ok_or_else(|| EnhancerError::config(format!("Invalid template Google Doc URL: {}", url)))?;
        Ok(Self::new(client, doc_id))
    }
}

#[async_trait]
impl TemplateSource for GoogleDocSource {
    async fn load(&self) -> Result<String> {
        self.client
            .fetch_text(&self.doc_id)
            .await
            .map_err(|e| EnhancerError::template_source(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("google doc {}", self.doc_id)
    }
}

#[derive(Debug, Deserialize)]
struct DocsDocument {
    #[serde(default)]
    body: Option<DocsBody>,
}

#[derive(Debug, Deserialize)]
struct DocsBody {
    #[serde(default)]
    content: Vec<DocsStructuralElement>,
}

#[derive(Debug, Deserialize)]
struct DocsStructuralElement {
    #[serde(default)]
    paragraph: Option<DocsParagraph>,
}

#[derive(Debug, Deserialize)]
struct DocsParagraph {
    #[serde(default)]
    elements: Vec<DocsParagraphElement>,
}

#[derive(Debug, Deserialize)]
struct DocsParagraphElement {
    #[serde(rename = "textRun", default)]
    text_run: Option<DocsTextRun>,
}

#[derive(Debug, Deserialize)]
struct DocsTextRun {
    #[serde(default)]
    content: String,
}

impl DocsDocument {
    /// Concatenate the text runs of every paragraph
    fn plain_text(&self) -> String {
        let Some(body) = &self.body else {
            return String::new();
        };

        body.content
            .iter()
            .filter_map(|element| element.paragraph.as_ref())
            .flat_map(|paragraph| paragraph.elements.iter())
            .filter_map(|element| element.text_run.as_ref())
            .map(|run| run.content.as_str())
            .collect()
    }
}
