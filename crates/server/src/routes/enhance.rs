use actix_web::{post, web, HttpResponse};
use enhancer_common::{EnhancerError, Result};
use enhancer_templates::extract_google_doc_id;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{EnhanceRequest, EnhanceResponse};

pub const MISSING_TRANSCRIPT: &str = "Missing transcript";

pub const NO_TEMPLATES: &str = "No templates found in the template document. Ensure they are separated by H1 headers (e.g., \"# My Template\").";

/// Enhance a transcript with every template in the library
#[post("/enhance")]
pub async fn enhance(
    req: web::Json<EnhanceRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> std::result::Result<HttpResponse, ApiError> {
    let transcript = require_transcript(req.transcript.as_deref().unwrap_or_default())?;

    let templates = state.load_templates().await?;
    if templates.is_empty() {
        return Err(EnhancerError::invalid_input(NO_TEMPLATES).into());
    }

    let transcript = resolve_transcript(&state, transcript).await?;
    require_transcript(&transcript)?;

    let results = state.workflow.enhance(&transcript, &templates).await;
    info!("Enhanced transcript with {} templates", results.len());

    Ok(HttpResponse::Ok().json(EnhanceResponse { results }))
}

fn require_transcript(transcript: &str) -> Result<&str> {
    if transcript.trim().is_empty() {
        return Err(EnhancerError::invalid_input(MISSING_TRANSCRIPT));
    }
    Ok(transcript)
}

/// Fetch the transcript from Google Docs when it is a document URL
async fn resolve_transcript(state: &AppState, transcript: &str) -> Result<String> {
    let Some(docs) = &state.docs else {
        return Ok(transcript.to_string());
    };

    match google_doc_reference(transcript) {
        Some(doc_id) => {
            info!("Reading transcript from Google Doc: {}", doc_id);
            docs.fetch_text(doc_id).await
        }
        None => Ok(transcript.to_string()),
    }
}

/// Document id when the whole transcript is a single Google Docs link
fn google_doc_reference(transcript: &str) -> Option<&str> {
    let candidate = transcript.trim();
    if !candidate.starts_with("http") || candidate.contains(char::is_whitespace) {
        return None;
    }
    extract_google_doc_id(candidate)
}
