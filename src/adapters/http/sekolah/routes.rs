use axum::{
    routing::{get, put},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_alumni, create_jurusan, delete_alumni, delete_jurusan, get_settings,
    get_static_values, list_alumni, list_jurusan, save_static_values, update_alumni,
    update_jurusan, update_settings,
};

pub fn sekolah_routes() -> Router<AppState> {
    Router::new()
        // ══ Settings ══
        .route("/settings", get(get_settings).post(update_settings))
        // ══ Jurusan ══
        .route("/jurusan", get(list_jurusan).post(create_jurusan))
        .route("/jurusan/:id", put(update_jurusan).delete(delete_jurusan))
        .route(
            "/jurusan/:id/static-values",
            get(get_static_values).post(save_static_values),
        )
        // ══ Alumni ══
        .route("/alumni", get(list_alumni).post(create_alumni))
        .route("/alumni/:id", put(update_alumni).delete(delete_alumni))
}
