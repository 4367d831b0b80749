//! HTTP handlers for sign-in.

use axum::{extract::State, response::IntoResponse, Json};

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::auth::LoginCommand;

use super::dto::{LoginRequest, LoginResponse};

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .login_handler()
        .handle(LoginCommand {
            login_id: req.login_id,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        msg: "Login berhasil".to_string(),
        access_token: result.access_token,
        user: result.user,
    }))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.current_user_handler().handle(user.id).await?;
    Ok(Json(account))
}
