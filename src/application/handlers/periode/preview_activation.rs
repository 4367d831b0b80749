//! PreviewActivationHandler - what activating a period would do.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PeriodeId};
use crate::domain::periode::{ActivationDirection, Periode};
use crate::ports::PeriodeRepository;

use super::find_periode;

#[derive(Debug, Clone, Copy)]
pub struct PreviewActivationQuery {
    pub id: PeriodeId,
}

#[derive(Debug, Clone)]
pub struct ActivationPreview {
    pub target: Periode,
    pub active: Option<Periode>,
    pub direction: ActivationDirection,
    pub confirmation: String,
}

pub struct PreviewActivationHandler {
    repo: Arc<dyn PeriodeRepository>,
}

impl PreviewActivationHandler {
    pub fn new(repo: Arc<dyn PeriodeRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, query: PreviewActivationQuery) -> Result<ActivationPreview, DomainError> {
        let target = find_periode(self.repo.as_ref(), query.id).await?;
        let active = self.repo.active().await?;
        let direction = ActivationDirection::between(&target, active.as_ref());
        Ok(ActivationPreview {
            confirmation: direction.confirmation(&target),
            target,
            active,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    #[tokio::test]
    async fn direction_follows_urutan_not_id() {
        let fx = Fixture::new();
        // Created first, so it has the lower id, but comes later academically.
        let later = fx.periode("2026/2027", 5, false).await;
        fx.periode("2024/2025", 3, true).await;
        let earlier = fx.periode("2023/2024", 2, false).await;
        let handler = PreviewActivationHandler::new(fx.store.clone());

        let forward = handler.handle(PreviewActivationQuery { id: later.id }).await.unwrap();
        assert_eq!(forward.direction, ActivationDirection::Forward);
        assert!(forward.confirmation.contains("naik kelas"));

        let backward = handler.handle(PreviewActivationQuery { id: earlier.id }).await.unwrap();
        assert_eq!(backward.direction, ActivationDirection::Backward);
    }
}
