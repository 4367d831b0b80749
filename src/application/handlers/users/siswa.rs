//! Student account handlers.
//!
//! Creating or editing a student also keeps their class history in the
//! active period in step with the account.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, JurusanId, Page, PageRequest, Role, UserId};
use crate::domain::periode::{KelasLevel, RiwayatKelas};
use crate::domain::users::{SiswaDraft, User, UserFilter, DEFAULT_SISWA_PASSWORD};
use crate::ports::{PasswordHasher, PeriodeRepository, UserRepository};

use super::{find_account, hash_chosen_password};

const NOT_FOUND: &str = "Siswa tidak ditemukan";

#[derive(Debug, Clone, Default)]
pub struct ListSiswaQuery {
    pub search: Option<String>,
    pub jurusan_id: Option<JurusanId>,
    pub kelas: Option<KelasLevel>,
    pub page: PageRequest,
}

pub struct ListSiswaHandler {
    users: Arc<dyn UserRepository>,
}

impl ListSiswaHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: ListSiswaQuery) -> Result<Page<User>, DomainError> {
        let filter = UserFilter {
            search: query.search,
            jurusan_id: query.jurusan_id,
            kelas: query.kelas,
            ..UserFilter::role(Role::Siswa)
        };
        self.users.list(&filter, query.page).await
    }
}

/// Places a student in the active period with their current class. An
/// existing row keeps its final status.
async fn sync_active_riwayat(periode: &dyn PeriodeRepository, user: &User) -> Result<(), DomainError> {
    let (Some(active), Some(kelas)) = (periode.active().await?, user.kelas_saat_ini) else {
        return Ok(());
    };
    if !KelasLevel::GRADES.contains(&kelas) {
        return Ok(());
    }
    let row = match periode.riwayat(user.id, active.id).await? {
        Some(existing) => RiwayatKelas {
            tingkat_kelas: kelas,
            jurusan_id: user.jurusan_id,
            ..existing
        },
        None => RiwayatKelas::aktif(user.id, active.id, kelas, user.jurusan_id),
    };
    periode.upsert_riwayat(&row).await
}

#[derive(Debug, Clone)]
pub struct CreateSiswaCommand {
    pub draft: SiswaDraft,
    pub password: Option<String>,
}

pub struct CreateSiswaHandler {
    users: Arc<dyn UserRepository>,
    periode: Arc<dyn PeriodeRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreateSiswaHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        periode: Arc<dyn PeriodeRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            periode,
            hasher,
        }
    }

    pub async fn handle(&self, cmd: CreateSiswaCommand) -> Result<User, DomainError> {
        // 1. Validate
        let new_user = cmd.draft.validate()?;

        // 2. Password: chosen or the default
        let hash = match hash_chosen_password(self.hasher.as_ref(), cmd.password.as_deref()).await? {
            Some(hash) => hash,
            None => self.hasher.hash(DEFAULT_SISWA_PASSWORD).await?,
        };

        // 3. Persist and enrol
        let user = self.users.create(new_user, hash).await?;
        sync_active_riwayat(self.periode.as_ref(), &user).await?;

        tracing::info!(user_id = %user.id, "siswa created");
        Ok(user)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSiswaCommand {
    pub id: UserId,
    pub draft: SiswaDraft,
    /// Blank or absent keeps the current password.
    pub password: Option<String>,
}

pub struct UpdateSiswaHandler {
    users: Arc<dyn UserRepository>,
    periode: Arc<dyn PeriodeRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateSiswaHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        periode: Arc<dyn PeriodeRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            periode,
            hasher,
        }
    }

    pub async fn handle(&self, cmd: UpdateSiswaCommand) -> Result<User, DomainError> {
        find_account(self.users.as_ref(), cmd.id, Role::Siswa, NOT_FOUND).await?;
        let new_user = cmd.draft.validate()?;
        let password = hash_chosen_password(self.hasher.as_ref(), cmd.password.as_deref()).await?;

        let user = self.users.update(cmd.id, new_user).await?;
        if let Some(hash) = password {
            self.users.set_password(cmd.id, hash).await?;
        }
        sync_active_riwayat(self.periode.as_ref(), &user).await?;
        Ok(user)
    }
}

pub struct DeleteSiswaHandler {
    users: Arc<dyn UserRepository>,
}

impl DeleteSiswaHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, id: UserId) -> Result<(), DomainError> {
        find_account(self.users.as_ref(), id, Role::Siswa, NOT_FOUND).await?;
        self.users.delete(id).await?;
        tracing::info!(user_id = %id, "siswa deleted");
        Ok(())
    }
}
