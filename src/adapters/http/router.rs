//! Top-level API router.

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde::Serialize;

use super::auth::auth_routes;
use super::bwm::bwm_routes;
use super::dashboard::dashboard_routes;
use super::kriteria::kriteria_routes;
use super::middleware::auth_middleware;
use super::monitoring::monitoring_routes;
use super::periode::periode_routes;
use super::rekomendasi::rekomendasi_routes;
use super::sekolah::sekolah_routes;
use super::simulation::simulation_routes;
use super::state::AppState;
use super::users::users_routes;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/status
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Every API route with the bearer token middleware applied.
///
/// Transport layers (tracing, CORS, timeouts, compression) are added by the
/// binary so tests can drive this router bare.
pub fn api_router(state: AppState) -> Router {
    let validator = state.session_validator.clone();
    Router::new()
        .route("/api/status", get(status))
        .merge(auth_routes())
        .merge(kriteria_routes())
        .merge(bwm_routes())
        .merge(rekomendasi_routes())
        .merge(periode_routes())
        .merge(sekolah_routes())
        .merge(users_routes())
        .merge(monitoring_routes())
        .merge(dashboard_routes())
        .merge(simulation_routes())
        .layer(from_fn_with_state(validator, auth_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::auth::{MockPasswordHasher, MockSessionValidator, MockTokenIssuer};
    use crate::adapters::memory::InMemoryStore;

    fn router() -> Router {
        let state = AppState::in_memory(
            Arc::new(InMemoryStore::new()),
            Arc::new(MockSessionValidator::new()),
            Arc::new(MockTokenIssuer::new()),
            Arc::new(MockPasswordHasher),
        );
        api_router(state)
    }

    #[tokio::test]
    async fn status_is_public() {
        let response = router()
            .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn protected_route_without_token_is_unauthorized() {
        let response = router()
            .oneshot(Request::get("/kriteria").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
