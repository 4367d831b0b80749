//! CreatePeriodeHandler - adds an inactive period.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::periode::Periode;
use crate::ports::PeriodeRepository;

#[derive(Debug, Clone)]
pub struct CreatePeriodeCommand {
    pub nama_periode: String,
    /// Defaults to one past the highest existing ordering.
    pub urutan: Option<i32>,
}

pub struct CreatePeriodeHandler {
    repo: Arc<dyn PeriodeRepository>,
}

impl CreatePeriodeHandler {
    pub fn new(repo: Arc<dyn PeriodeRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, cmd: CreatePeriodeCommand) -> Result<Periode, DomainError> {
        let nama = Periode::validate_nama(&cmd.nama_periode)?;
        let urutan = match cmd.urutan {
            Some(urutan) => urutan,
            None => {
                let existing: Vec<Periode> =
                    self.repo.list().await?.into_iter().map(|s| s.periode).collect();
                Periode::next_urutan(&existing)
            }
        };

        let periode = self.repo.create(&nama, urutan).await?;
        tracing::info!(periode_id = %periode.id, urutan, "periode created");
        Ok(periode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn urutan_defaults_to_next() {
        let fx = Fixture::new();
        fx.periode("2024/2025", 4, false).await;

        let created = CreatePeriodeHandler::new(fx.store.clone())
            .handle(CreatePeriodeCommand {
                nama_periode: " 2025/2026 ".to_string(),
                urutan: None,
            })
            .await
            .unwrap();

        assert_eq!(created.urutan, 5);
        assert_eq!(created.nama_periode, "2025/2026");
        assert!(!created.is_active);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let fx = Fixture::new();
        let err = CreatePeriodeHandler::new(fx.store.clone())
            .handle(CreatePeriodeCommand {
                nama_periode: "  ".to_string(),
                urutan: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Nama wajib diisi");
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let fx = Fixture::new();
        fx.periode("2024/2025", 1, false).await;
        let err = CreatePeriodeHandler::new(fx.store.clone())
            .handle(CreatePeriodeCommand {
                nama_periode: "2024/2025".to_string(),
                urutan: Some(9),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }
}
