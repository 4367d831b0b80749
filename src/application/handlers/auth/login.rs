//! LoginHandler - exchanges credentials for a signed token.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode};
use crate::domain::users::User;
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

const INVALID_CREDENTIALS: &str =
    "Kredensial tidak valid (User tidak ditemukan atau password salah)";

#[derive(Debug, Clone)]
pub struct LoginCommand {
    /// Email, username or NISN.
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub user: User,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        let login_id = cmd.login_id.trim();
        if login_id.is_empty() || cmd.password.is_empty() {
            return Err(DomainError::validation(
                "login_id",
                "Login ID dan Password wajib diisi",
            ));
        }

        // 1. Unknown account and wrong password look the same to the caller
        let credentials = match self.users.find_credentials(login_id).await? {
            Some(credentials) => credentials,
            None => return Err(DomainError::new(ErrorCode::Unauthorized, INVALID_CREDENTIALS)),
        };
        if !self
            .hasher
            .verify(&cmd.password, &credentials.password_hash)
            .await?
        {
            tracing::info!(user_id = %credentials.user.id, "login rejected");
            return Err(DomainError::new(ErrorCode::Unauthorized, INVALID_CREDENTIALS));
        }

        // 2. Sign
        let user = credentials.user;
        let identity = AuthenticatedUser::new(user.id, &user.username, &user.name, user.role);
        let access_token = self.tokens.issue(&identity).await?;

        tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");
        Ok(LoginResult { access_token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{MockPasswordHasher, MockTokenIssuer};
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::Role;
    use crate::domain::periode::KelasLevel;

    fn handler(fx: &Fixture, tokens: Arc<MockTokenIssuer>) -> LoginHandler {
        LoginHandler::new(fx.store.clone(), Arc::new(MockPasswordHasher), tokens)
    }

    fn login(id: &str, password: &str) -> LoginCommand {
        LoginCommand {
            login_id: id.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn issues_token_with_account_claims() {
        let fx = Fixture::new();
        let siswa = fx.siswa("ani", KelasLevel::Sepuluh, None).await;
        let tokens = Arc::new(MockTokenIssuer::new());

        let result = handler(&fx, tokens.clone())
            .handle(login(" ani ", "123456"))
            .await
            .unwrap();

        assert_eq!(result.access_token, format!("token-{}", siswa.id));
        assert_eq!(result.user.id, siswa.id);
        let issued = tokens.issued();
        assert_eq!(issued[0].role, Role::Siswa);
        assert_eq!(issued[0].name, "Siswa ani");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let fx = Fixture::new();
        fx.siswa("ani", KelasLevel::Sepuluh, None).await;

        let err = handler(&fx, Arc::new(MockTokenIssuer::new()))
            .handle(login("ani", "salah"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn unknown_account_gets_the_same_error() {
        let fx = Fixture::new();
        let err = handler(&fx, Arc::new(MockTokenIssuer::new()))
            .handle(login("nobody", "123456"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn blank_input_is_a_validation_error() {
        let fx = Fixture::new();
        let err = handler(&fx, Arc::new(MockTokenIssuer::new()))
            .handle(login("  ", ""))
            .await
            .unwrap_err();
        assert!(err.code.is_validation());
    }
}
