//! Liveness and readiness probes

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use tracing::{debug, warn};

/// Configure probe routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(healthz))
        .route("/readyz", web::get().to(readyz));
}

/// Liveness: up from bind until the server has fully stopped
pub async fn healthz(state: web::Data<AppState>) -> HttpResponse {
    if state.service.is_healthy() {
        HttpResponse::Ok().body("OK")
    } else {
        HttpResponse::ServiceUnavailable().body("Service Unavailable")
    }
}

/// Readiness: serving, and the upstream API answers without a server error
pub async fn readyz(state: web::Data<AppState>) -> HttpResponse {
    if !state.service.is_ready() {
        return HttpResponse::ServiceUnavailable().body("Service Not Ready");
    }

    let timeout = state.config.upstream.readiness_timeout();
    match state.github.probe(timeout).await {
        Ok(status) if status.is_server_error() => {
            warn!(status = status.as_u16(), "Upstream API reported a server error");
            HttpResponse::ServiceUnavailable().body("GitHub API Error")
        }
        Ok(status) => {
            debug!(status = status.as_u16(), "Upstream API reachable");
            HttpResponse::Ok().body("Ready")
        }
        Err(e) => {
            warn!(error = %e, "Upstream API unreachable");
            HttpResponse::ServiceUnavailable().body("GitHub API Unreachable")
        }
    }
}
