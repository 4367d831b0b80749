//! Token issuing port, the counterpart of [`super::SessionValidator`].

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Issues access tokens after a successful login.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Signs a token carrying the user's id, role, username and name.
    ///
    /// # Errors
    ///
    /// - `AuthError::ServiceUnavailable` if signing fails
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError>;
}
