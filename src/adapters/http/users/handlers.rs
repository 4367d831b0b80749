//! HTTP handlers for account administration.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::adapters::http::dto::{
    DataResponse, MessageResponse, PagedResponse, SearchParams, StudentFilterParams,
};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::users::{
    CreatePakarCommand, CreateSiswaCommand, ListPakarQuery, ListSiswaQuery, UpdatePakarCommand,
    UpdateSiswaCommand,
};
use crate::domain::foundation::{Role, UserId};

use super::dto::{PakarRequest, SiswaRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Siswa
// ════════════════════════════════════════════════════════════════════════════════

/// GET /admin/siswa
pub async fn list_siswa(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<StudentFilterParams>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let page = state
        .list_siswa_handler()
        .handle(ListSiswaQuery {
            search: params.search,
            jurusan_id: params.jurusan_id,
            kelas: params.kelas,
            page: state.page(params.page),
        })
        .await?;
    Ok(Json(PagedResponse::from_page(page, |u| u)))
}

/// POST /admin/siswa
pub async fn create_siswa(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<SiswaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let siswa = state
        .create_siswa_handler()
        .handle(CreateSiswaCommand {
            draft: req.draft,
            password: req.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Siswa berhasil ditambahkan", siswa)),
    ))
}

/// PUT /admin/siswa/{id}
pub async fn update_siswa(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<UserId>,
    ApiJson(req): ApiJson<SiswaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let siswa = state
        .update_siswa_handler()
        .handle(UpdateSiswaCommand {
            id,
            draft: req.draft,
            password: req.password,
        })
        .await?;
    Ok(Json(DataResponse::new("Data siswa diperbarui", siswa)))
}

/// DELETE /admin/siswa/{id}
pub async fn delete_siswa(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    state.delete_siswa_handler().handle(id).await?;
    Ok(Json(MessageResponse::new("Siswa dihapus")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Pakar
// ════════════════════════════════════════════════════════════════════════════════

/// GET /admin/pakar
pub async fn list_pakar(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let page = state
        .list_pakar_handler()
        .handle(ListPakarQuery {
            search: params.search,
            page: state.page(params.page),
        })
        .await?;
    Ok(Json(PagedResponse::from_page(page, |u| u)))
}

/// POST /admin/pakar
pub async fn create_pakar(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<PakarRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let pakar = state
        .create_pakar_handler()
        .handle(CreatePakarCommand {
            draft: req.draft,
            password: req.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Pakar berhasil ditambahkan", pakar)),
    ))
}

/// PUT /admin/pakar/{id}
pub async fn update_pakar(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<UserId>,
    ApiJson(req): ApiJson<PakarRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let pakar = state
        .update_pakar_handler()
        .handle(UpdatePakarCommand {
            id,
            draft: req.draft,
            password: req.password,
        })
        .await?;
    Ok(Json(DataResponse::new("Data pakar diperbarui", pakar)))
}

/// DELETE /admin/pakar/{id}
pub async fn delete_pakar(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    state.delete_pakar_handler().handle(id).await?;
    Ok(Json(MessageResponse::new("Pakar dihapus")))
}
