//! GetInputContextHandler - what an expert needs to fill the comparison
//! form.

use std::sync::Arc;

use crate::domain::bwm::ComparisonSet;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::kriteria::{natural_sort_by_kode, Kriteria};
use crate::domain::sekolah::bwm_reference;
use crate::ports::{BwmRepository, KriteriaRepository, SettingsRepository};

#[derive(Debug, Clone, Copy)]
pub struct GetInputContextQuery {
    pub pakar_id: UserId,
}

/// `global_best`/`global_worst` are `None` until the admin locks them.
#[derive(Debug, Clone)]
pub struct InputContext {
    pub global_best: Option<Kriteria>,
    pub global_worst: Option<Kriteria>,
    pub kriteria_list: Vec<Kriteria>,
    pub saved: ComparisonSet,
}

pub struct GetInputContextHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    settings: Arc<dyn SettingsRepository>,
    bwm: Arc<dyn BwmRepository>,
}

impl GetInputContextHandler {
    pub fn new(
        kriteria: Arc<dyn KriteriaRepository>,
        settings: Arc<dyn SettingsRepository>,
        bwm: Arc<dyn BwmRepository>,
    ) -> Self {
        Self {
            kriteria,
            settings,
            bwm,
        }
    }

    pub async fn handle(&self, query: GetInputContextQuery) -> Result<InputContext, DomainError> {
        let mut kriteria_list = self.kriteria.list().await?;
        natural_sort_by_kode(&mut kriteria_list, |k| k.kode.as_str());

        let reference = bwm_reference(&self.settings.all().await?);
        let pick = |id| kriteria_list.iter().find(|k| k.id == id).cloned();
        let global_best = reference.and_then(|r| pick(r.best()));
        let global_worst = reference.and_then(|r| pick(r.worst()));

        let saved = self.bwm.comparisons_for(query.pakar_id).await?;

        Ok(InputContext {
            global_best,
            global_worst,
            kriteria_list,
            saved,
        })
    }
}
