//! UpdateKriteriaHandler - revalidates and replaces a criterion's body.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, KriteriaId};
use crate::domain::kriteria::{Kriteria, KriteriaDraft};
use crate::ports::KriteriaRepository;

#[derive(Debug, Clone)]
pub struct UpdateKriteriaCommand {
    pub id: KriteriaId,
    pub draft: KriteriaDraft,
}

pub struct UpdateKriteriaHandler {
    repository: Arc<dyn KriteriaRepository>,
}

impl UpdateKriteriaHandler {
    pub fn new(repository: Arc<dyn KriteriaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateKriteriaCommand) -> Result<Kriteria, DomainError> {
        // 1. Load
        let mut kriteria = self
            .repository
            .find(cmd.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Kriteria tidak ditemukan"))?;

        // 2. Validate and apply; the stored kode wins
        kriteria.apply_update(cmd.draft.validate()?);

        // 3. Persist
        self.repository.update(&kriteria).await?;

        tracing::info!(kriteria_id = %kriteria.id, "Kriteria updated");
        Ok(kriteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::kriteria::{test_draft, Atribut, TipeInputKind};

    #[tokio::test]
    async fn kode_in_payload_is_ignored() {
        let fx = Fixture::new();
        let existing = fx.kriteria("C1", TipeInputKind::Number, Atribut::Benefit).await;
        let mut draft = test_draft("C99", TipeInputKind::Number);
        draft.nama = "Nilai Rapor".to_string();

        let updated = UpdateKriteriaHandler::new(fx.store.clone())
            .handle(UpdateKriteriaCommand { id: existing.id, draft })
            .await
            .unwrap();

        assert_eq!(updated.kode, "C1");
        assert_eq!(updated.nama, "Nilai Rapor");
    }

    #[tokio::test]
    async fn missing_criterion_is_not_found() {
        let fx = Fixture::new();

        let err = UpdateKriteriaHandler::new(fx.store.clone())
            .handle(UpdateKriteriaCommand {
                id: KriteriaId::new(404),
                draft: test_draft("C1", TipeInputKind::Number),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
