use axum::{
    routing::{get, put},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{create_kriteria, delete_kriteria, list_kriteria, update_kriteria};

/// Criteria routes. Reading is open to every role; changes are admin only.
pub fn kriteria_routes() -> Router<AppState> {
    Router::new()
        .route("/kriteria", get(list_kriteria).post(create_kriteria))
        .route("/kriteria/:id", put(update_kriteria).delete(delete_kriteria))
}
