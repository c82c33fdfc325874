use actix_web::{get, web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::TemplatesResponse;

/// Titles currently parsed from the template document
#[get("/templates")]
pub async fn list_templates(
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let templates: Vec<String> = state
        .load_templates()
        .await?
        .into_iter()
        .map(|t| t.title)
        .collect();

    Ok(HttpResponse::Ok().json(TemplatesResponse {
        count: templates.len(),
        templates,
    }))
}
