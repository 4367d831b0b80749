use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::dashboard_stats;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(dashboard_stats))
}
