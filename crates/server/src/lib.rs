//! Enhancer HTTP Server
//!
//! Actix-web REST API and browser UI for transcript enhancement

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use enhancer_common::{AppConfig, EnhancerError, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod error;
pub mod routes;
pub mod state;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use error::ApiError;
pub use state::AppState;
pub use types::{EnhanceRequest, EnhanceResponse, EnhancementResult};
pub use workflow::{EnhancementWorkflow, PROCESSING_ERROR};

/// Build state from configuration and serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!(
        "Starting server on {} (provider: {}, model: {})",
        bind_address,
        state.workflow.provider(),
        state.workflow.model()
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(&bind_address)
    .map_err(|e| EnhancerError::config(format!("Failed to bind {}: {}", bind_address, e)))?
    .run()
    .await
    .map_err(|e| EnhancerError::Other(e.into()))?;

    info!("Server stopped");
    Ok(())
}
