//! Mapping from domain errors to HTTP responses.
//!
//! Every failing handler returns [`ApiError`]. The body always carries a
//! `msg` the screens show verbatim, plus a stable `code`.

use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Message shown for failures the caller cannot act on.
pub const INTERNAL_MESSAGE: &str = "Terjadi kesalahan pada server";

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            msg: msg.into(),
            details: None,
        }
    }
}

/// Domain error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("Data tidak valid: {}", rejection.body_text()),
        ))
    }
}

/// HTTP status for an error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidStateTransition
        | ErrorCode::ReferenceNotSet => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::SolverFailed | ErrorCode::DatabaseError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.code);

        let body = if status.is_server_error() {
            tracing::error!(code = %err.code, error = %err.message, "request failed");
            ErrorResponse::new(err.code.to_string(), INTERNAL_MESSAGE)
        } else {
            let details = (!err.details.is_empty())
                .then(|| err.details.into_iter().collect::<BTreeMap<_, _>>());
            ErrorResponse {
                code: err.code.to_string(),
                msg: err.message,
                details,
            }
        };
        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejection uses the standard error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}
