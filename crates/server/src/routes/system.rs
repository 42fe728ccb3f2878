use actix_web::{get, web, HttpResponse};
use tracing::debug;

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness probe
#[get("/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    debug!("Health check");

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.summarizer.model().to_string(),
    })
}
