//! Admin management of student and expert accounts.

mod pakar;
mod siswa;

pub use pakar::{
    CreatePakarCommand, CreatePakarHandler, DeletePakarHandler, ListPakarHandler, ListPakarQuery,
    UpdatePakarCommand, UpdatePakarHandler,
};
pub use siswa::{
    CreateSiswaCommand, CreateSiswaHandler, DeleteSiswaHandler, ListSiswaHandler, ListSiswaQuery,
    UpdateSiswaCommand, UpdateSiswaHandler,
};

use crate::domain::foundation::{DomainError, Role, UserId};
use crate::domain::users::User;
use crate::ports::{PasswordHasher, UserRepository};

const MIN_PASSWORD_LEN: usize = 6;

/// Loads an account and checks it has the expected role.
pub(crate) async fn find_account(
    repo: &dyn UserRepository,
    id: UserId,
    role: Role,
    missing: &str,
) -> Result<User, DomainError> {
    repo.find(id)
        .await?
        .filter(|u| u.role == role)
        .ok_or_else(|| DomainError::not_found(missing))
}

/// Hashes an explicitly chosen password, rejecting ones that are too short.
/// Blank input means "no change" and yields `None`.
pub(crate) async fn hash_chosen_password(
    hasher: &dyn PasswordHasher,
    password: Option<&str>,
) -> Result<Option<String>, DomainError> {
    let Some(password) = password.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(
            "password",
            format!("Password minimal {} karakter", MIN_PASSWORD_LEN),
        ));
    }
    Ok(Some(hasher.hash(password).await?))
}
