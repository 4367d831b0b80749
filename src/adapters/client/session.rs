//! Signed-in session held by the client.

use std::sync::{PoisonError, RwLock};

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::Role;
use crate::domain::users::User;

/// Token plus the account it was issued for.
#[derive(Debug, Clone)]
pub struct Session {
    token: Secret<String>,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: Secret::new(token.into()),
            user,
        }
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Holds at most one session. Shared by every request the client makes.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous session.
    pub fn begin(&self, token: impl Into<String>, user: User) {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Session::new(token, user));
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token().to_string())
    }

    pub fn is_active(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Clears the session. Returns whether one was active.
    pub fn end(&self) -> bool {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::users::JenisPakar;

    fn user() -> User {
        User {
            id: UserId::new(7),
            name: "Guru BK".to_string(),
            username: "gurubk".to_string(),
            email: None,
            nisn: None,
            role: Role::Pakar,
            jenis_pakar: Some(JenisPakar::Gurubk),
            jurusan_id: None,
            kelas_saat_ini: None,
        }
    }

    #[test]
    fn begin_then_end() {
        let store = SessionStore::new();
        assert!(store.token().is_none());

        store.begin("abc", user());
        assert_eq!(store.token().as_deref(), Some("abc"));
        assert_eq!(store.current().map(|s| s.role()), Some(Role::Pakar));

        assert!(store.end());
        assert!(!store.is_active());
        assert!(!store.end());
    }

    #[test]
    fn begin_replaces_previous_session() {
        let store = SessionStore::new();
        store.begin("first", user());
        store.begin("second", user());
        assert_eq!(store.token().as_deref(), Some("second"));
    }
}
