//! Accounts and the admin-side drafts that create them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, JurusanId, Role, UserId, ValidationError};
use crate::domain::periode::KelasLevel;

/// Password given to a student account on creation or reset.
pub const DEFAULT_SISWA_PASSWORD: &str = "123456";

/// Password given to an expert account on creation or reset.
pub const DEFAULT_PAKAR_PASSWORD: &str = "password123";

/// Expert group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JenisPakar {
    Gurubk,
    Kaprodi,
}

impl JenisPakar {
    pub fn as_str(&self) -> &'static str {
        match self {
            JenisPakar::Gurubk => "gurubk",
            JenisPakar::Kaprodi => "kaprodi",
        }
    }
}

impl fmt::Display for JenisPakar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JenisPakar {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gurubk" => Ok(JenisPakar::Gurubk),
            "kaprodi" => Ok(JenisPakar::Kaprodi),
            other => Err(ValidationError::invalid_format(
                "jenis_pakar",
                format!("unknown expert type '{}'", other),
            )),
        }
    }
}

/// A stored account. The password hash never leaves the user repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: Option<String>,
    pub nisn: Option<String>,
    pub role: Role,
    pub jenis_pakar: Option<JenisPakar>,
    pub jurusan_id: Option<JurusanId>,
    pub kelas_saat_ini: Option<KelasLevel>,
}

impl User {
    /// True when `login_id` is this user's email, username or NISN.
    pub fn matches_login(&self, login_id: &str) -> bool {
        self.username == login_id
            || self.email.as_deref() == Some(login_id)
            || self.nisn.as_deref() == Some(login_id)
    }
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| required(&v))
}

/// Fields of a new user, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: Option<String>,
    pub nisn: Option<String>,
    pub role: Role,
    pub jenis_pakar: Option<JenisPakar>,
    pub jurusan_id: Option<JurusanId>,
    pub kelas_saat_ini: Option<KelasLevel>,
}

/// Admin input for a student account.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SiswaDraft {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nisn: Option<String>,
    #[serde(default)]
    pub kelas: Option<KelasLevel>,
    #[serde(default)]
    pub jurusan_id: Option<JurusanId>,
}

impl SiswaDraft {
    /// Name and username are required; a student must be in a grade, not
    /// alumni. A missing class defaults to 10.
    pub fn validate(self) -> Result<NewUser, DomainError> {
        let (Some(name), Some(username)) = (required(&self.name), required(&self.username)) else {
            return Err(DomainError::validation(
                "username",
                "NIS (Username) dan Nama wajib diisi",
            ));
        };
        let kelas = self.kelas.unwrap_or(KelasLevel::Sepuluh);
        if !KelasLevel::GRADES.contains(&kelas) {
            return Err(DomainError::validation("kelas", "Kelas harus 10, 11 atau 12"));
        }
        Ok(NewUser {
            name,
            username,
            email: optional(self.email),
            nisn: optional(self.nisn),
            role: Role::Siswa,
            jenis_pakar: None,
            jurusan_id: self.jurusan_id,
            kelas_saat_ini: Some(kelas),
        })
    }
}

/// Admin input for an expert account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PakarDraft {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub jenis_pakar: Option<JenisPakar>,
    #[serde(default)]
    pub jurusan_id: Option<JurusanId>,
}

impl PakarDraft {
    /// A head of department must name a major; a counsellor never keeps one.
    pub fn validate(self) -> Result<NewUser, DomainError> {
        let (Some(name), Some(username), Some(jenis)) =
            (required(&self.name), required(&self.username), self.jenis_pakar)
        else {
            return Err(DomainError::validation(
                "username",
                "Username/NIP, Nama, dan Jenis Pakar wajib diisi",
            ));
        };
        let jurusan_id = match jenis {
            JenisPakar::Kaprodi => Some(self.jurusan_id.ok_or_else(|| {
                DomainError::validation("jurusan_id", "Kaprodi wajib memilih Jurusan")
            })?),
            JenisPakar::Gurubk => None,
        };
        Ok(NewUser {
            name,
            username,
            email: optional(self.email),
            nisn: None,
            role: Role::Pakar,
            jenis_pakar: Some(jenis),
            jurusan_id,
            kelas_saat_ini: None,
        })
    }
}

/// Filters for admin and monitoring lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub search: Option<String>,
    pub jurusan_id: Option<JurusanId>,
    pub kelas: Option<KelasLevel>,
}

impl UserFilter {
    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    /// Case-insensitive match of the search text against name, NISN and
    /// username.
    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|r| r != user.role) {
            return false;
        }
        if self.jurusan_id.is_some() && self.jurusan_id != user.jurusan_id {
            return false;
        }
        if self.kelas.is_some() && self.kelas != user.kelas_saat_ini {
            return false;
        }
        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => true,
            Some(q) => {
                let q = q.to_lowercase();
                user.name.to_lowercase().contains(&q)
                    || user.username.to_lowercase().contains(&q)
                    || user
                        .nisn
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&q))
            }
        }
    }
}
