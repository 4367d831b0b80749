//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the HTTP middleware injects after a bearer
//! token has been validated by the `SessionValidator` port. It carries only
//! the claims handlers actually use: identity, display data and role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{DomainError, ErrorCode, UserId, ValidationError};

/// Account role. Every endpoint is gated on one or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Pakar,
    Siswa,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Pakar => "pakar",
            Role::Siswa => "siswa",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "pakar" => Ok(Role::Pakar),
            "siswa" => Ok(Role::Siswa),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            name: name.into(),
            role,
        }
    }

    /// Fails with the standard "Akses ditolak" error unless the user holds
    /// one of `allowed`.
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), DomainError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(DomainError::forbidden())
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Login id or password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token is valid but the user no longer exists in the system.
    #[error("User not found")]
    UserNotFound,

    /// Token issuing or hashing failed.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::UserNotFound
        )
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        let code = match err {
            AuthError::ServiceUnavailable(_) => ErrorCode::InternalError,
            _ => ErrorCode::Unauthorized,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(1), "gurubk", "Ibu Guru BK", role)
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Pakar".parse::<Role>().unwrap(), Role::Pakar);
        assert!("guru".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Siswa).unwrap(), "\"siswa\"");
    }

    #[test]
    fn require_role_accepts_listed_roles() {
        assert!(user(Role::Pakar)
            .require_role(&[Role::Admin, Role::Pakar])
            .is_ok());
    }

    #[test]
    fn require_role_rejects_other_roles() {
        let err = user(Role::Siswa).require_role(&[Role::Admin]).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.message, "Akses ditolak");
    }

    #[test]
    fn expired_token_requires_reauthentication() {
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::service_unavailable("down").requires_reauthentication());
    }

    #[test]
    fn auth_errors_map_to_unauthorized() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        let err: DomainError = AuthError::service_unavailable("down").into();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
