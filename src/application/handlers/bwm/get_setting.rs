//! GetBwmSettingHandler - criteria plus the currently locked reference.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, KriteriaId};
use crate::domain::kriteria::{natural_sort_by_kode, Kriteria};
use crate::domain::sekolah::bwm_reference;
use crate::ports::{KriteriaRepository, SettingsRepository};

#[derive(Debug, Clone)]
pub struct BwmSettingView {
    pub kriterias: Vec<Kriteria>,
    pub current_best: Option<KriteriaId>,
    pub current_worst: Option<KriteriaId>,
}

pub struct GetBwmSettingHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl GetBwmSettingHandler {
    pub fn new(kriteria: Arc<dyn KriteriaRepository>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { kriteria, settings }
    }

    pub async fn handle(&self) -> Result<BwmSettingView, DomainError> {
        let mut kriterias = self.kriteria.list().await?;
        natural_sort_by_kode(&mut kriterias, |k| k.kode.as_str());
        let reference = bwm_reference(&self.settings.all().await?);
        Ok(BwmSettingView {
            kriterias,
            current_best: reference.map(|r| r.best()),
            current_worst: reference.map(|r| r.worst()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::kriteria::{Atribut, TipeInputKind};

    #[tokio::test]
    async fn reference_is_empty_until_locked() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Number, Atribut::Benefit).await;
        let c2 = fx.kriteria("C2", TipeInputKind::Number, Atribut::Benefit).await;
        let handler = GetBwmSettingHandler::new(fx.store.clone(), fx.store.clone());

        let before = handler.handle().await.unwrap();
        assert_eq!(before.current_best, None);

        fx.reference(c2.id, c1.id).await;
        let after = handler.handle().await.unwrap();
        assert_eq!(after.current_best, Some(c2.id));
        assert_eq!(after.current_worst, Some(c1.id));
        assert_eq!(after.kriterias.len(), 2);
    }
}
