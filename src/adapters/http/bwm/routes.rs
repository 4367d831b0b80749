use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{get_setting, input_context, save_comparisons, save_setting, weights};

pub fn bwm_routes() -> Router<AppState> {
    Router::new()
        .route("/bwm/admin/setting", get(get_setting).post(save_setting))
        .route("/bwm/input-context", get(input_context))
        .route("/bwm/save", post(save_comparisons))
        .route("/bwm/weights", get(weights))
}
