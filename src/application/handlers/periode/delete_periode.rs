//! DeletePeriodeHandler - removes an inactive period and its class history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PeriodeId};
use crate::ports::PeriodeRepository;

use super::find_periode;

#[derive(Debug, Clone, Copy)]
pub struct DeletePeriodeCommand {
    pub id: PeriodeId,
}

pub struct DeletePeriodeHandler {
    repo: Arc<dyn PeriodeRepository>,
}

impl DeletePeriodeHandler {
    pub fn new(repo: Arc<dyn PeriodeRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, cmd: DeletePeriodeCommand) -> Result<(), DomainError> {
        let periode = find_periode(self.repo.as_ref(), cmd.id).await?;
        if periode.is_active {
            return Err(DomainError::invalid_state(
                "Tidak bisa menghapus periode yang sedang aktif",
            ));
        }
        if !self.repo.delete(cmd.id).await? {
            return Err(DomainError::not_found("Periode tidak ditemukan"));
        }
        tracing::info!(periode_id = %cmd.id, "periode deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::periode::KelasLevel;

    #[tokio::test]
    async fn active_period_cannot_be_deleted() {
        let fx = Fixture::new();
        let p = fx.periode("2025/2026", 1, true).await;

        let err = DeletePeriodeHandler::new(fx.store.clone())
            .handle(DeletePeriodeCommand { id: p.id })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(err.message, "Tidak bisa menghapus periode yang sedang aktif");
    }

    #[tokio::test]
    async fn deleting_cascades_class_history() {
        let fx = Fixture::new();
        let old = fx.periode("2024/2025", 1, false).await;
        let siswa = fx.siswa("siswa10", KelasLevel::Sepuluh, None).await;
        fx.enrol(&siswa, &old, KelasLevel::Sepuluh).await;

        DeletePeriodeHandler::new(fx.store.clone())
            .handle(DeletePeriodeCommand { id: old.id })
            .await
            .unwrap();

        assert!(fx.store.riwayat_in(old.id).await.unwrap().is_empty());
    }
}
