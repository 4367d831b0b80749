//! HTTP handlers for periods and promotion.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::adapters::http::dto::{DataResponse, MessageResponse};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::periode::{
    ActivatePeriodeCommand, CreatePeriodeCommand, DeletePeriodeCommand, PreviewActivationQuery,
    UpdatePeriodeCommand,
};
use crate::application::handlers::promotion::ExecutePromotionCommand;
use crate::domain::foundation::{DomainError, ErrorCode, PeriodeId, Role};

use super::dto::{
    ActivationPreviewResponse, ActivationResponse, PeriodeListResponse, PeriodeRequest,
    PromotionRequest, PromotionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Periode
// ════════════════════════════════════════════════════════════════════════════════

/// GET /periode
pub async fn list_periode(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let periodes = state.list_periode_handler().handle().await?;
    Ok(Json(PeriodeListResponse { periodes }))
}

/// POST /periode
pub async fn create_periode(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<PeriodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let periode = state
        .create_periode_handler()
        .handle(CreatePeriodeCommand {
            nama_periode: req.nama_periode,
            urutan: req.urutan,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Periode berhasil dibuat", periode)),
    ))
}

/// PUT /periode/{id}
pub async fn update_periode(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<PeriodeId>,
    ApiJson(req): ApiJson<PeriodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let periode = state
        .update_periode_handler()
        .handle(UpdatePeriodeCommand {
            id,
            nama_periode: req.nama_periode,
            urutan: req.urutan,
        })
        .await?;
    Ok(Json(DataResponse::new("Periode diperbarui", periode)))
}

/// DELETE /periode/{id}
pub async fn delete_periode(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<PeriodeId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    state
        .delete_periode_handler()
        .handle(DeletePeriodeCommand { id })
        .await?;
    Ok(Json(MessageResponse::new("Periode dihapus")))
}

/// GET /periode/{id}/activation-preview
pub async fn activation_preview(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<PeriodeId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let preview = state
        .preview_activation_handler()
        .handle(PreviewActivationQuery { id })
        .await?;
    Ok(Json(ActivationPreviewResponse::from(preview)))
}

/// POST /periode/{id}/activate
pub async fn activate_periode(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<PeriodeId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let outcome = state
        .activate_periode_handler()
        .handle(ActivatePeriodeCommand { id })
        .await?;
    Ok(Json(ActivationResponse::from(outcome)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Promotion
// ════════════════════════════════════════════════════════════════════════════════

/// GET /promotion/summary
pub async fn promotion_summary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let summary = state.promotion_summary_handler().handle().await?;
    Ok(Json(summary))
}

/// POST /promotion/execute
///
/// The body is optional; an empty body promotes with this year's batch.
pub async fn execute_promotion(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let req: PromotionRequest = if body.iter().all(u8::is_ascii_whitespace) {
        PromotionRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Data tidak valid: {}", e))
        })?
    };

    let report = state
        .execute_promotion_handler()
        .handle(ExecutePromotionCommand { batch: req.batch })
        .await?;
    Ok(Json(PromotionResponse {
        msg: format!(
            "Kenaikan kelas selesai: {} lulus, {} naik ke kelas 12, {} naik ke kelas 11",
            report.lulus, report.naik_ke_12, report.naik_ke_11
        ),
        data: report,
    }))
}
