//! HTTP handlers for the questionnaire and results.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::adapters::http::dto::MessageResponse;
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::rekomendasi::{
    GetFormQuery, GetResultQuery, SaveAnswersCommand,
};
use crate::domain::foundation::Role;

use super::dto::{FormResponse, ResultParams, ResultResponse, SaveAnswersRequest};

/// GET /siswa/form
pub async fn get_form(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Siswa])?;
    let fields = state
        .get_form_handler()
        .handle(GetFormQuery { siswa_id: user.id })
        .await?;
    Ok(Json(FormResponse { data: fields }))
}

/// POST /siswa/save
pub async fn save_answers(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<SaveAnswersRequest>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Siswa])?;
    state
        .save_answers_handler()
        .handle(SaveAnswersCommand {
            siswa_id: user.id,
            values: req.into_values(),
        })
        .await?;
    Ok(Json(MessageResponse::new("Data berhasil disimpan!")))
}

/// GET /moora/result?id=
pub async fn get_result(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ResultParams>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_role(&[Role::Siswa])?;
    let view = state
        .get_result_handler()
        .handle(GetResultQuery {
            siswa_id: user.id,
            hasil_id: params.id,
        })
        .await?;
    Ok(Json(ResultResponse::from(view)))
}
