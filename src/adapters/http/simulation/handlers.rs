//! HTTP handlers for simulations.

use axum::{extract::State, response::IntoResponse, Json};

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;

use super::dto::{
    BwmSimulationRequest, BwmSimulationResponse, IntegratedSimulationRequest,
    MooraSimulationRequest,
};

/// POST /simulation/bwm
pub async fn simulate_bwm(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiJson(req): ApiJson<BwmSimulationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.simulate_bwm_handler().handle(req.into())?;
    Ok(Json(BwmSimulationResponse {
        success: true,
        result,
    }))
}

/// POST /simulation/moora
pub async fn simulate_moora(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiJson(req): ApiJson<MooraSimulationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let analysis = state.simulate_moora_handler().handle(req.into()).await?;
    Ok(Json(analysis))
}

/// POST /simulation/integrated
pub async fn simulate_integrated(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ApiJson(req): ApiJson<IntegratedSimulationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.simulate_integrated_handler().handle(req.into())?;
    Ok(Json(result))
}
