use actix_web::{error::InternalError, web, HttpResponse};

use crate::types::ErrorResponse;

pub mod enhance;
pub mod system;
pub mod templates;
pub mod ui;

/// Register every route and the JSON extractor settings
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(ui::index)
        .service(enhance::enhance)
        .service(templates::list_templates)
        .service(system::health);
}

/// Reject unreadable JSON bodies with the usual error shape
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(4 * 1024 * 1024)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest()
                .json(ErrorResponse::new(format!("Invalid request body: {}", err)));
            InternalError::from_response(err, response).into()
        })
}
