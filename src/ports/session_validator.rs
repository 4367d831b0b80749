//! Session validation port for bearer tokens.
//!
//! HTTP middleware hands every `Authorization: Bearer` token to this port
//! and injects the resulting [`AuthenticatedUser`] into the request. The
//! production implementation verifies HS256 JWTs signed by the backend; a
//! mock implementation backs the tests.
//!
//! # Contract
//!
//! Implementations must:
//! - Verify the token signature
//! - Verify the expiry claim
//! - Return `AuthError::InvalidToken` for malformed or badly signed tokens
//! - Return `AuthError::TokenExpired` for expired tokens

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedUser)` - Token is valid, user extracted from claims
    /// * `Err(AuthError::InvalidToken)` - Token is malformed or signature invalid
    /// * `Err(AuthError::TokenExpired)` - Token signature valid but expired
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
