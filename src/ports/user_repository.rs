//! User account repository port.
//!
//! Password hashes are written through this port but only ever read back
//! through [`UserRepository::find_credentials`], so no other query can leak
//! them.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Page, PageRequest, UserId};
use crate::domain::periode::PromotionReport;
use crate::domain::users::{NewUser, User, UserFilter};

/// A user together with the stored bcrypt hash, for login only.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Persistence for admin, expert and student accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Looks a user up by email, username or NISN.
    async fn find_credentials(&self, login_id: &str) -> Result<Option<UserCredentials>, DomainError>;

    /// One page of matching users ordered by name.
    async fn list(&self, filter: &UserFilter, page: PageRequest) -> Result<Page<User>, DomainError>;

    /// Number of matching users.
    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError>;

    /// Insert a user.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the username, email or NISN is taken
    async fn create(&self, user: NewUser, password_hash: String) -> Result<User, DomainError>;

    /// Overwrite a user's profile fields.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    /// - `Conflict` if the username, email or NISN is taken
    async fn update(&self, id: UserId, user: NewUser) -> Result<User, DomainError>;

    async fn set_password(&self, id: UserId, password_hash: String) -> Result<(), DomainError>;

    /// Returns false when nothing was deleted.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// School-wide promotion in one transaction. Grade 12 students become
    /// alumni records of `batch` (skipping a record with the same name and
    /// batch) and move to `alumni`; grade 11 moves to 12; grade 10 to 11.
    async fn promote_grades(&self, batch: i32) -> Result<PromotionReport, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn UserRepository>();
    }
}
