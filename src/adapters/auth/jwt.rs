//! HS256 JWT adapter.
//!
//! Implements both [`TokenIssuer`] and [`SessionValidator`] with one shared
//! signing key. Tokens carry the user id as `sub` plus the role, username
//! and display name, so validating a request never touches the database.
//!
//! # Security
//!
//! - **Signature**: HS256 with the configured key
//! - **Issuer (iss)**: must match the configured issuer
//! - **Expiry (exp)**: must be in the future

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, UserId};
use crate::ports::{SessionValidator, TokenIssuer};

/// Claims written into every access token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject - the user id
    sub: String,
    role: Role,
    username: String,
    name: String,
    iss: String,
    exp: i64,
    iat: i64,
}

/// Issues and validates the backend's own access tokens.
pub struct JwtAuth {
    secret: SecretString,
    issuer: String,
    ttl: Duration,
}

impl JwtAuth {
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.clone(),
            config.issuer.clone(),
            Duration::hours(config.token_ttl_hours as i64),
        )
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

#[async_trait]
impl TokenIssuer for JwtAuth {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role,
            username: user.username.clone(),
            name: user.name.clone(),
            iss: self.issuer.clone(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };
        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AuthError::service_unavailable("token signing failed")
        })
    }
}

#[async_trait]
impl SessionValidator for JwtAuth {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        let data = decode::<Claims>(token, &key, &self.validation()).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        let claims = data.claims;
        let id: i64 = claims.sub.parse().map_err(|_| {
            tracing::warn!("Invalid user id in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            UserId::new(id),
            claims.username,
            claims.name,
            claims.role,
        ))
    }
}

impl std::fmt::Debug for JwtAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuth")
            .field("issuer", &self.issuer)
            .field("ttl_hours", &self.ttl.num_hours())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-key-that-is-long-enough";

    fn auth() -> JwtAuth {
        JwtAuth::new(SECRET, "spk-karir", Duration::hours(24))
    }

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(42), "gurubk", "Ibu Guru BK", Role::Pakar)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Round trip
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn issued_token_validates_back_to_the_same_user() {
        let auth = auth();
        let token = auth.issue(&user()).await.unwrap();

        let validated = auth.validate(&token).await.unwrap();

        assert_eq!(validated, user());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn token_signed_with_other_key_is_invalid() {
        let other = JwtAuth::new("a-completely-different-signing-key!!", "spk-karir", Duration::hours(1));
        let token = other.issue(&user()).await.unwrap();

        assert_eq!(auth().validate(&token).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn token_from_other_issuer_is_invalid() {
        let other = JwtAuth::new(SECRET, "someone-else", Duration::hours(1));
        let token = other.issue(&user()).await.unwrap();

        assert_eq!(auth().validate(&token).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let past = Utc::now() - Duration::hours(3);
        let claims = Claims {
            sub: "42".to_string(),
            role: Role::Pakar,
            username: "gurubk".to_string(),
            name: "Ibu Guru BK".to_string(),
            iss: "spk-karir".to_string(),
            exp: (past + Duration::hours(1)).timestamp(),
            iat: past.timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(auth().validate(&token).await, Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        assert_eq!(auth().validate("not-a-jwt").await, Err(AuthError::InvalidToken));
    }

    #[test]
    fn debug_output_hides_secret() {
        assert!(!format!("{:?}", auth()).contains(SECRET));
    }
}
