//! DeleteKriteriaHandler - removes a criterion with its values and weights.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, KriteriaId};
use crate::ports::KriteriaRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteKriteriaCommand {
    pub id: KriteriaId,
}

pub struct DeleteKriteriaHandler {
    repository: Arc<dyn KriteriaRepository>,
}

impl DeleteKriteriaHandler {
    pub fn new(repository: Arc<dyn KriteriaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteKriteriaCommand) -> Result<(), DomainError> {
        if !self.repository.delete(cmd.id).await? {
            return Err(DomainError::not_found("Kriteria tidak ditemukan"));
        }
        tracing::info!(kriteria_id = %cmd.id, "Kriteria deleted");
        Ok(())
    }
}
