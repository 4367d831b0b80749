//! bcrypt password hashing.

use async_trait::async_trait;

use crate::domain::foundation::AuthError;
use crate::ports::PasswordHasher;

/// bcrypt on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AuthError::service_unavailable(format!("hash task failed: {}", e)))?
            .map_err(|e| {
                tracing::error!("bcrypt hash failed: {}", e);
                AuthError::service_unavailable("password hashing failed")
            })
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_string();
        let hash = hash.to_string();
        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AuthError::service_unavailable(format!("verify task failed: {}", e)))?;
        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!("Stored password hash is unreadable: {}", e);
                Ok(false)
            }
        }
    }
}
