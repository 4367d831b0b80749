//! Request and response shapes for sign-in.

use serde::{Deserialize, Serialize};

use crate::domain::users::User;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email, username or NISN.
    #[serde(default)]
    pub login_id: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub msg: String,
    pub access_token: String,
    pub user: User,
}
