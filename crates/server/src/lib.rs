//! docsum HTTP server
//!
//! Actix-web REST API in front of the summarizer

mod error;
pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use docsum_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::{ApiError, GENERIC_FAILURE_MESSAGE};
pub use state::AppState;

/// Largest request body accepted; long content is truncated after parsing
pub const MAX_BODY_BYTES: usize = 512 * 1024 * 1024;

/// Register routes and extractor settings
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(routes::summarize::summarize)
        .service(routes::system::health);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::warn!("Rejected request body: {}", err);
            ApiError::invalid_body().into()
        })
}

/// Run the HTTP server until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = web::Data::new(Arc::new(AppState::new(config)?));

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
