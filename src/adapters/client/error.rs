//! Client error taxonomy.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Message shown when the server could not be reached at all.
pub const TRANSPORT_MESSAGE: &str = "Gagal terhubung ke server";

/// Message shown when the session token was rejected.
pub const SESSION_EXPIRED_MESSAGE: &str = "Sesi berakhir, silakan login kembali";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Connection, timeout or undecodable response.
    #[error("{TRANSPORT_MESSAGE}")]
    Transport(String),

    /// The backend answered 4xx/5xx; `msg` is shown verbatim.
    #[error("{msg}")]
    Backend { status: u16, msg: String },

    /// Rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The token was rejected and the session has been cleared.
    #[error("{SESSION_EXPIRED_MESSAGE}")]
    SessionExpired,
}

impl ClientError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ClientError::Transport(err.to_string())
    }

    /// Text for the screen. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Backend { status, .. } => Some(*status),
            ClientError::SessionExpired => Some(401),
            _ => None,
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        ClientError::Validation(err.message)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_hides_details() {
        let err = ClientError::transport("connection refused (os error 111)");
        assert_eq!(err.user_message(), TRANSPORT_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn backend_message_is_verbatim() {
        let err = ClientError::Backend {
            status: 409,
            msg: "Kode kriteria sudah digunakan".to_string(),
        };
        assert_eq!(err.user_message(), "Kode kriteria sudah digunakan");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn domain_validation_keeps_message() {
        let err: ClientError =
            DomainError::validation("kode", "Kode dan nama kriteria wajib diisi").into();
        assert_eq!(
            err,
            ClientError::Validation("Kode dan nama kriteria wajib diisi".to_string())
        );
    }
}
