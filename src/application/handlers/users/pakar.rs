//! Expert account handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Page, PageRequest, Role, UserId};
use crate::domain::users::{PakarDraft, User, UserFilter, DEFAULT_PAKAR_PASSWORD};
use crate::ports::{PasswordHasher, UserRepository};

use super::{find_account, hash_chosen_password};

const NOT_FOUND: &str = "Pakar tidak ditemukan";

#[derive(Debug, Clone, Default)]
pub struct ListPakarQuery {
    pub search: Option<String>,
    pub page: PageRequest,
}

pub struct ListPakarHandler {
    users: Arc<dyn UserRepository>,
}

impl ListPakarHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: ListPakarQuery) -> Result<Page<User>, DomainError> {
        let filter = UserFilter {
            search: query.search,
            ..UserFilter::role(Role::Pakar)
        };
        self.users.list(&filter, query.page).await
    }
}

#[derive(Debug, Clone)]
pub struct CreatePakarCommand {
    pub draft: PakarDraft,
    pub password: Option<String>,
}

pub struct CreatePakarHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreatePakarHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: CreatePakarCommand) -> Result<User, DomainError> {
        let new_user = cmd.draft.validate()?;
        let hash = match hash_chosen_password(self.hasher.as_ref(), cmd.password.as_deref()).await? {
            Some(hash) => hash,
            None => self.hasher.hash(DEFAULT_PAKAR_PASSWORD).await?,
        };
        let user = self.users.create(new_user, hash).await?;
        tracing::info!(user_id = %user.id, jenis_pakar = ?user.jenis_pakar, "pakar created");
        Ok(user)
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePakarCommand {
    pub id: UserId,
    pub draft: PakarDraft,
    pub password: Option<String>,
}

pub struct UpdatePakarHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdatePakarHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: UpdatePakarCommand) -> Result<User, DomainError> {
        find_account(self.users.as_ref(), cmd.id, Role::Pakar, NOT_FOUND).await?;
        let new_user = cmd.draft.validate()?;
        let password = hash_chosen_password(self.hasher.as_ref(), cmd.password.as_deref()).await?;

        let user = self.users.update(cmd.id, new_user).await?;
        if let Some(hash) = password {
            self.users.set_password(cmd.id, hash).await?;
        }
        Ok(user)
    }
}

pub struct DeletePakarHandler {
    users: Arc<dyn UserRepository>,
}

impl DeletePakarHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Removes the account together with its comparisons and weights.
    pub async fn handle(&self, id: UserId) -> Result<(), DomainError> {
        find_account(self.users.as_ref(), id, Role::Pakar, NOT_FOUND).await?;
        self.users.delete(id).await?;
        tracing::info!(user_id = %id, "pakar deleted");
        Ok(())
    }
}
