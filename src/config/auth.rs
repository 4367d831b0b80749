//! Authentication configuration (HS256 JWT)

use serde::Deserialize;
use std::fmt;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum signing key length accepted in production.
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Token signing settings.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing key
    #[serde(default)]
    pub jwt_secret: String,

    /// Access token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,

    /// `iss` claim written to and required in every token
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl AuthConfig {
    /// In production the key must be long; elsewhere it only has to exist.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && self.jwt_secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        if self.token_ttl_hours == 0 || self.token_ttl_hours > 720 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl_hours(),
            issuer: default_issuer(),
        }
    }
}

fn default_token_ttl_hours() -> u64 {
    24
}

fn default_issuer() -> String {
    "spk-karir".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn secret_is_required() {
        assert_eq!(
            AuthConfig::default().validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn production_requires_long_secret() {
        let config = with_secret("dev-secret");
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(32))
        );
        assert!(with_secret(&"k".repeat(32))
            .validate(&Environment::Production)
            .is_ok());
    }

    #[test]
    fn token_ttl_is_bounded() {
        let config = AuthConfig {
            token_ttl_hours: 0,
            ..with_secret("dev-secret")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenTtl)
        );
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", with_secret("super-secret-value"));
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("REDACTED"));
    }
}
