//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionValidator`, `TokenIssuer` and
//! `PasswordHasher` ports without signing keys or bcrypt cost.
//!
//! # Example
//!
//! ```ignore
//! use spk_karir::adapters::auth::MockSessionValidator;
//! use spk_karir::domain::foundation::{AuthenticatedUser, Role, UserId};
//!
//! let validator = MockSessionValidator::new().with_user(
//!     "admin-token",
//!     AuthenticatedUser::new(UserId::new(1), "admin", "Administrator", Role::Admin),
//! );
//! let user = validator.validate("admin-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, UserId};
use crate::ports::{PasswordHasher, SessionValidator, TokenIssuer};

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a token for a user with the given id and role.
    pub fn with_role(self, token: impl Into<String>, id: i64, role: Role) -> Self {
        let user = AuthenticatedUser::new(
            UserId::new(id),
            format!("{}{}", role, id),
            format!("Test {} {}", role, id),
            role,
        );
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut slot) = self.force_error.write() {
            *slot = Some(error);
        }
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let forced = self
            .force_error
            .read()
            .map_err(|_| AuthError::service_unavailable("mock lock poisoned"))?
            .clone();
        if let Some(error) = forced {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(|_| AuthError::service_unavailable("mock lock poisoned"))?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Issues `token-<id>` and remembers the user so a paired
/// [`MockSessionValidator`] can be fed from it.
#[derive(Debug, Default)]
pub struct MockTokenIssuer {
    issued: RwLock<Vec<AuthenticatedUser>>,
}

impl MockTokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users a token was issued for, oldest first.
    pub fn issued(&self) -> Vec<AuthenticatedUser> {
        self.issued.read().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        self.issued
            .write()
            .map_err(|_| AuthError::service_unavailable("mock lock poisoned"))?
            .push(user.clone());
        Ok(format!("token-{}", user.id))
    }
}

/// Stores passwords as `plain:<password>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPasswordHasher;

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash.strip_prefix("plain:") == Some(password))
    }
}
