use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{list_monitoring, save_catatan};

pub fn monitoring_routes() -> Router<AppState> {
    Router::new()
        .route("/monitoring", get(list_monitoring))
        .route("/monitoring/:id/catatan", post(save_catatan))
}
