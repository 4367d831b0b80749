//! CurrentUserHandler - the account behind a validated token.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::users::User;
use crate::ports::UserRepository;

pub struct CurrentUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CurrentUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// A token for a deleted account no longer identifies anyone.
    pub async fn handle(&self, id: UserId) -> Result<User, DomainError> {
        self.users
            .find(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::Unauthorized, "Akun tidak ditemukan"))
    }
}
