//! HTTP handlers for monitoring.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::adapters::http::dto::{PagedResponse, StudentFilterParams};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::monitoring::{ListMonitoringQuery, SaveCatatanCommand};
use crate::domain::foundation::{HasilId, Role};

use super::dto::{CatatanRequest, CatatanResponse, MonitoringRowResponse};

/// GET /monitoring?jurusan_id=&kelas=&search=&page=
pub async fn list_monitoring(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<StudentFilterParams>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin, Role::Pakar])?;
    let page = state
        .list_monitoring_handler()
        .handle(ListMonitoringQuery {
            search: params.search,
            jurusan_id: params.jurusan_id,
            kelas: params.kelas,
            page: state.page(params.page),
        })
        .await?;

    let names: HashMap<_, _> = state
        .list_jurusan_handler()
        .handle()
        .await?
        .into_iter()
        .map(|j| (j.id, j.nama_jurusan))
        .collect();

    Ok(Json(PagedResponse::from_page(page, |row| {
        let jurusan = row
            .siswa
            .jurusan_id
            .and_then(|id| names.get(&id).cloned())
            .unwrap_or_else(|| "-".to_string());
        MonitoringRowResponse::new(row, jurusan)
    })))
}

/// POST /monitoring/{id}/catatan
pub async fn save_catatan(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(hasil_id): Path<HasilId>,
    ApiJson(req): ApiJson<CatatanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Admin, Role::Pakar])?;
    let catatan = state
        .save_catatan_handler()
        .handle(SaveCatatanCommand {
            hasil_id,
            catatan: req.catatan,
        })
        .await?;
    tracing::info!(hasil_id = %hasil_id, by = %user.id, "counsellor note saved");
    Ok(Json(CatatanResponse {
        msg: "Catatan Guru BK berhasil disimpan!".to_string(),
        catatan,
    }))
}
