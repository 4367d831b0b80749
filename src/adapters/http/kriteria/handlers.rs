//! HTTP handlers for criteria.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::adapters::http::dto::{DataResponse, MessageResponse};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::kriteria::{
    CreateKriteriaCommand, DeleteKriteriaCommand, UpdateKriteriaCommand,
};
use crate::domain::foundation::{KriteriaId, Role};

use super::dto::{KriteriaListResponse, KriteriaRequest, KriteriaResponse};

/// GET /kriteria
pub async fn list_kriteria(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let kriteria = state.list_kriteria_handler().handle().await?;
    Ok(Json(KriteriaListResponse {
        data: kriteria.into_iter().map(KriteriaResponse::from).collect(),
    }))
}

/// POST /kriteria
pub async fn create_kriteria(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<KriteriaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let created = state
        .create_kriteria_handler()
        .handle(CreateKriteriaCommand { draft: req.into() })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(
            "Kriteria berhasil ditambahkan",
            KriteriaResponse::from(created),
        )),
    ))
}

/// PUT /kriteria/{id}
pub async fn update_kriteria(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<KriteriaId>,
    ApiJson(req): ApiJson<KriteriaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let updated = state
        .update_kriteria_handler()
        .handle(UpdateKriteriaCommand {
            id,
            draft: req.into(),
        })
        .await?;
    Ok(Json(DataResponse::new(
        "Kriteria berhasil diupdate",
        KriteriaResponse::from(updated),
    )))
}

/// DELETE /kriteria/{id}
pub async fn delete_kriteria(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<KriteriaId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    state
        .delete_kriteria_handler()
        .handle(DeleteKriteriaCommand { id })
        .await?;
    Ok(Json(MessageResponse::new("Kriteria berhasil dihapus")))
}
