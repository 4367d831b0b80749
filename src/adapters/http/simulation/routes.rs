use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{simulate_bwm, simulate_integrated, simulate_moora};

pub fn simulation_routes() -> Router<AppState> {
    Router::new()
        .route("/simulation/bwm", post(simulate_bwm))
        .route("/simulation/moora", post(simulate_moora))
        .route("/simulation/integrated", post(simulate_integrated))
}
