use axum::{
    routing::{get, put},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_pakar, create_siswa, delete_pakar, delete_siswa, list_pakar, list_siswa,
    update_pakar, update_siswa,
};

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/siswa", get(list_siswa).post(create_siswa))
        .route("/admin/siswa/:id", put(update_siswa).delete(delete_siswa))
        .route("/admin/pakar", get(list_pakar).post(create_pakar))
        .route("/admin/pakar/:id", put(update_pakar).delete(delete_pakar))
}
