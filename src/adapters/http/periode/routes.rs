use axum::{
    routing::{get, post, put},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    activate_periode, activation_preview, create_periode, delete_periode, execute_promotion,
    list_periode, promotion_summary, update_periode,
};

pub fn periode_routes() -> Router<AppState> {
    Router::new()
        // ══ Periode ══
        .route("/periode", get(list_periode).post(create_periode))
        .route("/periode/:id", put(update_periode).delete(delete_periode))
        .route("/periode/:id/activation-preview", get(activation_preview))
        .route("/periode/:id/activate", post(activate_periode))
        // ══ Promotion ══
        .route("/promotion/summary", get(promotion_summary))
        .route("/promotion/execute", post(execute_promotion))
}
