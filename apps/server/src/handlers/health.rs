//! Health check endpoint.

use actix_web::{HttpResponse, web};

use postboard_shared::HealthResponse;

use crate::state::AppState;

/// Re-probes the store through the shared pool.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let reachable = match state.probe.probe().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health probe failed");
            false
        }
    };

    let response = HealthResponse::new(reachable, env!("CARGO_PKG_VERSION"), state.store.as_str())
        .with_timestamp(chrono::Utc::now().to_rfc3339());

    if response.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
