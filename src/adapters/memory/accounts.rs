//! User accounts and the school-wide grade promotion.

use async_trait::async_trait;

use crate::domain::foundation::{AlumniId, DomainError, Page, PageRequest, UserId};
use crate::domain::periode::{KelasLevel, PromotionReport, GRADUATE_DEFAULT_MAJOR, GRADUATE_STATUS};
use crate::domain::sekolah::Alumni;
use crate::domain::users::{NewUser, User, UserFilter};
use crate::ports::{UserCredentials, UserRepository};

use super::store::Tables;
use super::InMemoryStore;

fn check_unique(tables: &Tables, id: Option<UserId>, user: &NewUser) -> Result<(), DomainError> {
    for (other, _) in tables.users.values().filter(|(u, _)| Some(u.id) != id) {
        if other.username == user.username {
            return Err(DomainError::conflict("Username sudah digunakan"));
        }
        if user.email.is_some() && other.email == user.email {
            return Err(DomainError::conflict("Email sudah digunakan"));
        }
        if user.nisn.is_some() && other.nisn == user.nisn {
            return Err(DomainError::conflict("NISN sudah digunakan"));
        }
    }
    Ok(())
}

fn build(id: UserId, user: NewUser) -> User {
    User {
        id,
        name: user.name,
        username: user.username,
        email: user.email,
        nisn: user.nisn,
        role: user.role,
        jenis_pakar: user.jenis_pakar,
        jurusan_id: user.jurusan_id,
        kelas_saat_ini: user.kelas_saat_ini,
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.read()?.users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_credentials(&self, login_id: &str) -> Result<Option<UserCredentials>, DomainError> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|(u, _)| u.matches_login(login_id))
            .map(|(user, hash)| UserCredentials {
                user: user.clone(),
                password_hash: hash.clone(),
            }))
    }

    async fn list(&self, filter: &UserFilter, page: PageRequest) -> Result<Page<User>, DomainError> {
        let tables = self.read()?;
        let mut matching: Vec<User> = tables
            .users
            .values()
            .map(|(u, _)| u)
            .filter(|u| filter.matches(u))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(Page::from_vec(matching, page))
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        Ok(self
            .read()?
            .users
            .values()
            .filter(|(u, _)| filter.matches(u))
            .count() as u64)
    }

    async fn create(&self, user: NewUser, password_hash: String) -> Result<User, DomainError> {
        let mut tables = self.write()?;
        check_unique(&tables, None, &user)?;
        let user = build(UserId::new(tables.next_id()), user);
        tables.users.insert(user.id, (user.clone(), password_hash));
        Ok(user)
    }

    async fn update(&self, id: UserId, user: NewUser) -> Result<User, DomainError> {
        let mut tables = self.write()?;
        check_unique(&tables, Some(id), &user)?;
        let Some((stored, _)) = tables.users.get_mut(&id) else {
            return Err(DomainError::not_found("User tidak ditemukan"));
        };
        *stored = build(id, user);
        Ok(stored.clone())
    }

    async fn set_password(&self, id: UserId, password_hash: String) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        match tables.users.get_mut(&id) {
            Some((_, hash)) => {
                *hash = password_hash;
                Ok(())
            }
            None => Err(DomainError::not_found("User tidak ditemukan")),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut tables = self.write()?;
        if tables.users.remove(&id).is_none() {
            return Ok(false);
        }
        tables.nilai.retain(|(siswa, _), _| *siswa != id);
        tables.hasil.retain(|_, h| h.siswa_id != id);
        tables.riwayat.retain(|r| r.siswa_id != id);
        tables.comparisons.remove(&id);
        tables.bobot.retain(|b| b.pakar_id != id);
        Ok(true)
    }

    async fn promote_grades(&self, batch: i32) -> Result<PromotionReport, DomainError> {
        let mut tables = self.write()?;
        let mut report = PromotionReport::default();

        let graduates: Vec<(UserId, String, String)> = tables
            .users
            .values()
            .filter(|(u, _)| u.kelas_saat_ini == Some(KelasLevel::DuaBelas))
            .map(|(u, _)| {
                let major = u
                    .jurusan_id
                    .and_then(|id| tables.jurusan.get(&id))
                    .map(|j| j.nama_jurusan.clone())
                    .unwrap_or_else(|| GRADUATE_DEFAULT_MAJOR.to_string());
                (u.id, u.name.clone(), major)
            })
            .collect();

        for (id, name, major) in graduates {
            let recorded = tables
                .alumni
                .values()
                .any(|a| a.name == name && a.batch == batch);
            if !recorded {
                let alumni = Alumni {
                    id: AlumniId::new(tables.next_id()),
                    name,
                    status: GRADUATE_STATUS.to_string(),
                    batch,
                    major,
                };
                tables.alumni.insert(alumni.id, alumni);
            }
            if let Some((user, _)) = tables.users.get_mut(&id) {
                user.kelas_saat_ini = Some(KelasLevel::Alumni);
            }
            report.lulus += 1;
        }

        for (user, _) in tables.users.values_mut() {
            match user.kelas_saat_ini {
                Some(KelasLevel::Sebelas) => {
                    user.kelas_saat_ini = Some(KelasLevel::DuaBelas);
                    report.naik_ke_12 += 1;
                }
                Some(KelasLevel::Sepuluh) => {
                    user.kelas_saat_ini = Some(KelasLevel::Sebelas);
                    report.naik_ke_11 += 1;
                }
                _ => {}
            }
        }
        Ok(report)
    }
}
