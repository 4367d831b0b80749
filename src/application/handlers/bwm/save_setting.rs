//! SaveBwmSettingHandler - locks the global best/worst reference.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::bwm::BwmReference;
use crate::domain::foundation::{DomainError, KriteriaId};
use crate::domain::sekolah::{BWM_BEST_KEY, BWM_WORST_KEY};
use crate::ports::{KriteriaRepository, SettingsRepository};

#[derive(Debug, Clone, Copy)]
pub struct SaveBwmSettingCommand {
    pub best_id: Option<KriteriaId>,
    pub worst_id: Option<KriteriaId>,
}

pub struct SaveBwmSettingHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl SaveBwmSettingHandler {
    pub fn new(kriteria: Arc<dyn KriteriaRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { kriteria, settings }
    }

    pub async fn handle(&self, cmd: SaveBwmSettingCommand) -> Result<BwmReference, DomainError> {
        // 1. Both ends are required and must differ
        let (Some(best), Some(worst)) = (cmd.best_id, cmd.worst_id) else {
            return Err(DomainError::validation(
                "best_id",
                "Kriteria terbaik dan terburuk wajib dipilih",
            ));
        };
        let reference = BwmReference::new(best, worst)?;

        // 2. Both must exist
        for (field, id) in [("best_id", best), ("worst_id", worst)] {
            if self.kriteria.find(id).await?.is_none() {
                return Err(DomainError::validation(
                    field,
                    format!("Kriteria {} tidak ditemukan", id),
                ));
            }
        }

        // 3. Store
        let entries: BTreeMap<String, String> = [
            (BWM_BEST_KEY.to_string(), best.to_string()),
            (BWM_WORST_KEY.to_string(), worst.to_string()),
        ]
        .into_iter()
        .collect();
        self.settings.set_many(&entries).await?;

        tracing::info!(best = %best, worst = %worst, "BWM reference locked");
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::kriteria::{Atribut, TipeInputKind};
    use crate::domain::sekolah::bwm_reference;

    #[tokio::test]
    async fn stores_reference() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Number, Atribut::Benefit).await;
        let c2 = fx.kriteria("C2", TipeInputKind::Number, Atribut::Benefit).await;

        SaveBwmSettingHandler::new(fx.store.clone(), fx.store.clone())
            .handle(SaveBwmSettingCommand {
                best_id: Some(c1.id),
                worst_id: Some(c2.id),
            })
            .await
            .unwrap();

        let stored = bwm_reference(&fx.store.all().await.unwrap()).unwrap();
        assert_eq!(stored.best(), c1.id);
        assert_eq!(stored.worst(), c2.id);
    }

    #[tokio::test]
    async fn same_best_and_worst_is_rejected() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Number, Atribut::Benefit).await;

        let err = SaveBwmSettingHandler::new(fx.store.clone(), fx.store.clone())
            .handle(SaveBwmSettingCommand {
                best_id: Some(c1.id),
                worst_id: Some(c1.id),
            })
            .await
            .unwrap_err();

        assert!(err.code.is_validation());
    }

    #[tokio::test]
    async fn unknown_criterion_is_rejected() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Number, Atribut::Benefit).await;

        let result = SaveBwmSettingHandler::new(fx.store.clone(), fx.store.clone())
            .handle(SaveBwmSettingCommand {
                best_id: Some(c1.id),
                worst_id: Some(KriteriaId::new(77)),
            })
            .await;

        assert!(result.is_err());
        assert!(fx.store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_side_is_rejected() {
        let fx = Fixture::new();
        let result = SaveBwmSettingHandler::new(fx.store.clone(), fx.store.clone())
            .handle(SaveBwmSettingCommand {
                best_id: None,
                worst_id: Some(KriteriaId::new(1)),
            })
            .await;
        assert!(result.is_err());
    }
}
