use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use enhancer_common::EnhancerError;
use tracing::error;

use crate::types::ErrorResponse;

/// Message used when an error carries no text
pub const GENERIC_ERROR: &str = "An unexpected error occurred.";

/// Request level error rendered as `{ "error": ... }`
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub EnhancerError);

impl ApiError {
    /// Message shown to the client
    pub fn message(&self) -> String {
        let message = self.0.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            message
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed ({}): {}", status.as_u16(), self.0);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self.0);
        }

        HttpResponse::build(status).json(ErrorResponse::new(self.message()))
    }
}
