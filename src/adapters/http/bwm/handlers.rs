//! HTTP handlers for BWM.

use axum::{extract::State, response::IntoResponse, Json};

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::bwm::{
    GetInputContextQuery, SaveBwmSettingCommand, SubmitComparisonsCommand,
};
use crate::domain::foundation::Role;

use super::dto::{
    BwmSettingRequest, BwmSettingResponse, ComparisonRequest, InputContextResponse,
    SavedSettingResponse, SubmissionResponse, WeightsResponse,
};

/// GET /bwm/admin/setting
pub async fn get_setting(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let view = state.get_bwm_setting_handler().handle().await?;
    Ok(Json(BwmSettingResponse::from(view)))
}

/// POST /bwm/admin/setting
pub async fn save_setting(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<BwmSettingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let reference = state
        .save_bwm_setting_handler()
        .handle(SaveBwmSettingCommand {
            best_id: req.best_id,
            worst_id: req.worst_id,
        })
        .await?;
    Ok(Json(SavedSettingResponse {
        msg: "Pengaturan BWM berhasil disimpan".to_string(),
        best_id: reference.best(),
        worst_id: reference.worst(),
    }))
}

/// GET /bwm/input-context
pub async fn input_context(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Pakar, Role::Admin])?;
    let ctx = state
        .input_context_handler()
        .handle(GetInputContextQuery { pakar_id: user.id })
        .await?;
    Ok(Json(InputContextResponse::from(ctx)))
}

/// POST /bwm/save
pub async fn save_comparisons(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<ComparisonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Pakar, Role::Admin])?;
    let result = state
        .submit_comparisons_handler()
        .handle(SubmitComparisonsCommand {
            pakar_id: user.id,
            comparisons: req.into(),
        })
        .await?;
    Ok(Json(SubmissionResponse::from(result)))
}

/// GET /bwm/weights
pub async fn weights(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin, Role::Pakar])?;
    let weights = state.get_weights_handler().handle().await?;
    Ok(Json(WeightsResponse::from(weights)))
}
