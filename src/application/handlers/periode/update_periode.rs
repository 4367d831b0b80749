//! UpdatePeriodeHandler - renames or reorders a period.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PeriodeId};
use crate::domain::periode::Periode;
use crate::ports::PeriodeRepository;

use super::find_periode;

#[derive(Debug, Clone)]
pub struct UpdatePeriodeCommand {
    pub id: PeriodeId,
    pub nama_periode: String,
    pub urutan: Option<i32>,
}

pub struct UpdatePeriodeHandler {
    repo: Arc<dyn PeriodeRepository>,
}

impl UpdatePeriodeHandler {
    pub fn new(repo: Arc<dyn PeriodeRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, cmd: UpdatePeriodeCommand) -> Result<Periode, DomainError> {
        let mut periode = find_periode(self.repo.as_ref(), cmd.id).await?;
        periode.nama_periode = Periode::validate_nama(&cmd.nama_periode)?;
        if let Some(urutan) = cmd.urutan {
            periode.urutan = urutan;
        }
        self.repo.update(&periode).await?;
        Ok(periode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    #[tokio::test]
    async fn renames_and_keeps_urutan_when_absent() {
        let fx = Fixture::new();
        let p = fx.periode("2024/2025", 2, false).await;

        let updated = UpdatePeriodeHandler::new(fx.store.clone())
            .handle(UpdatePeriodeCommand {
                id: p.id,
                nama_periode: "TA 2024/2025".to_string(),
                urutan: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.nama_periode, "TA 2024/2025");
        assert_eq!(updated.urutan, 2);
    }

    #[tokio::test]
    async fn missing_period_is_not_found() {
        let fx = Fixture::new();
        let err = UpdatePeriodeHandler::new(fx.store.clone())
            .handle(UpdatePeriodeCommand {
                id: PeriodeId::new(404),
                nama_periode: "x".to_string(),
                urutan: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Periode tidak ditemukan");
    }
}
