//! HTTP handler for the dashboard.

use axum::{extract::State, response::IntoResponse, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;

/// GET /dashboard/stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.dashboard_stats_handler().handle(&user).await?;
    Ok(Json(stats))
}
