//! Password hashing port.

use async_trait::async_trait;

use crate::domain::foundation::AuthError;

/// One-way password hashing. Implementations may be slow on purpose and
/// must not block the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// True when `password` matches `hash`. A malformed hash is a mismatch.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
