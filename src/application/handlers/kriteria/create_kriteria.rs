//! CreateKriteriaHandler - validates and stores a new criterion.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::kriteria::{Kriteria, KriteriaDraft};
use crate::ports::KriteriaRepository;

#[derive(Debug, Clone)]
pub struct CreateKriteriaCommand {
    pub draft: KriteriaDraft,
}

pub struct CreateKriteriaHandler {
    repository: Arc<dyn KriteriaRepository>,
}

impl CreateKriteriaHandler {
    pub fn new(repository: Arc<dyn KriteriaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateKriteriaCommand) -> Result<Kriteria, DomainError> {
        // 1. Validate the definition
        let definition = cmd.draft.validate()?;

        // 2. Persist (duplicate kode is a conflict)
        let kriteria = self.repository.create(definition).await?;

        tracing::info!(kriteria_id = %kriteria.id, kode = %kriteria.kode, "Kriteria created");
        Ok(kriteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::kriteria::{test_draft, OpsiPilihan, TipeInputKind};

    #[tokio::test]
    async fn stores_valid_criterion() {
        let fx = Fixture::new();
        let handler = CreateKriteriaHandler::new(fx.store.clone());

        let kriteria = handler
            .handle(CreateKriteriaCommand {
                draft: test_draft("C1", TipeInputKind::Likert),
            })
            .await
            .unwrap();

        assert_eq!(kriteria.kode, "C1");
        assert_eq!(kriteria.skala_maks, 5.0);
    }

    #[tokio::test]
    async fn duplicate_kode_is_conflict() {
        let fx = Fixture::new();
        let handler = CreateKriteriaHandler::new(fx.store.clone());
        let cmd = CreateKriteriaCommand {
            draft: test_draft("C1", TipeInputKind::Number),
        };
        handler.handle(cmd.clone()).await.unwrap();

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "Kode kriteria sudah digunakan");
    }

    #[tokio::test]
    async fn select_option_above_scale_is_rejected() {
        let fx = Fixture::new();
        let mut draft = test_draft("C4", TipeInputKind::Select);
        draft.skala_maks = 3.0;
        draft.opsi_pilihan = Some(vec![OpsiPilihan::new(4, "Tinggi")]);

        let err = CreateKriteriaHandler::new(fx.store.clone())
            .handle(CreateKriteriaCommand { draft })
            .await
            .unwrap_err();

        assert!(err.code.is_validation());
    }
}
