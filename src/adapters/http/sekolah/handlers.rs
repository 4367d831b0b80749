//! HTTP handlers for school data.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::adapters::http::dto::{DataResponse, MessageResponse, PagedResponse, SearchParams};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::sekolah::{SaveStaticValuesCommand, SearchAlumniQuery};
use crate::domain::foundation::{AlumniId, JurusanId, Role};
use crate::domain::sekolah::{AlumniDraft, JurusanDraft};

use super::dto::{JurusanListResponse, StaticValuesRequest, StaticValuesResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Settings
// ════════════════════════════════════════════════════════════════════════════════

/// GET /settings
pub async fn get_settings(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let settings = state.get_settings_handler().handle().await?;
    Ok(Json(settings))
}

/// POST /settings
pub async fn update_settings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(input): ApiJson<BTreeMap<String, serde_json::Value>>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let settings = state.update_settings_handler().handle(input).await?;
    Ok(Json(DataResponse::new(
        "Pengaturan sekolah berhasil diperbarui.",
        settings,
    )))
}

// ════════════════════════════════════════════════════════════════════════════════
// Jurusan
// ════════════════════════════════════════════════════════════════════════════════

/// GET /jurusan
pub async fn list_jurusan(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let data = state.list_jurusan_handler().handle().await?;
    Ok(Json(JurusanListResponse { data }))
}

/// POST /jurusan
pub async fn create_jurusan(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(draft): ApiJson<JurusanDraft>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let jurusan = state.create_jurusan_handler().handle(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Jurusan berhasil ditambah", jurusan)),
    ))
}

/// PUT /jurusan/{id}
pub async fn update_jurusan(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<JurusanId>,
    ApiJson(draft): ApiJson<JurusanDraft>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let jurusan = state.update_jurusan_handler().handle(id, draft).await?;
    Ok(Json(DataResponse::new("Jurusan diperbarui", jurusan)))
}

/// DELETE /jurusan/{id}
pub async fn delete_jurusan(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<JurusanId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    state.delete_jurusan_handler().handle(id).await?;
    Ok(Json(MessageResponse::new("Jurusan dihapus")))
}

/// GET /jurusan/{id}/static-values
pub async fn get_static_values(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<JurusanId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin, Role::Pakar])?;
    let values = state.get_static_values_handler().handle(id).await?;
    Ok(Json(StaticValuesResponse::from(values)))
}

/// POST /jurusan/{id}/static-values
pub async fn save_static_values(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<JurusanId>,
    ApiJson(req): ApiJson<StaticValuesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin, Role::Pakar])?;
    state
        .save_static_values_handler()
        .handle(SaveStaticValuesCommand {
            jurusan_id: id,
            values: req.values,
        })
        .await?;
    Ok(Json(MessageResponse::new(
        "Nilai statis jurusan berhasil disimpan!",
    )))
}

// ════════════════════════════════════════════════════════════════════════════════
// Alumni
// ════════════════════════════════════════════════════════════════════════════════

/// GET /alumni?search=&page=
pub async fn list_alumni(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .search_alumni_handler()
        .handle(SearchAlumniQuery {
            search: params.search,
            page: state.page(params.page),
        })
        .await?;
    Ok(Json(PagedResponse::from_page(page, |a| a)))
}

/// POST /alumni
pub async fn create_alumni(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(draft): ApiJson<AlumniDraft>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let alumni = state.create_alumni_handler().handle(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Data alumni ditambah", alumni)),
    ))
}

/// PUT /alumni/{id}
pub async fn update_alumni(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<AlumniId>,
    ApiJson(draft): ApiJson<AlumniDraft>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    let alumni = state.update_alumni_handler().handle(id, draft).await?;
    Ok(Json(DataResponse::new("Data alumni diperbarui", alumni)))
}

/// DELETE /alumni/{id}
pub async fn delete_alumni(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<AlumniId>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin])?;
    state.delete_alumni_handler().handle(id).await?;
    Ok(Json(MessageResponse::new("Data alumni dihapus")))
}
