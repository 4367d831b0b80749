use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{get_form, get_result, save_answers};

/// Student-only routes.
pub fn rekomendasi_routes() -> Router<AppState> {
    Router::new()
        .route("/siswa/form", get(get_form))
        .route("/siswa/save", post(save_answers))
        .route("/moora/result", get(get_result))
}
