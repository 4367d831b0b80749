//! GetWeightsHandler - criterion weights aggregated over every expert.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::domain::bwm::aggregate_weights;
use crate::domain::foundation::{DomainError, KriteriaId};
use crate::domain::kriteria::{natural_sort_by_kode, Kriteria};
use crate::ports::{BwmRepository, KriteriaRepository};

/// Mean weight per criterion; `1/n` for a criterion nobody has weighed.
#[derive(Debug, Clone)]
pub struct AggregatedWeights {
    /// Criteria in natural code order.
    pub kriteria: Vec<Kriteria>,
    pub by_id: BTreeMap<KriteriaId, f64>,
    /// Experts who have submitted at least one weight.
    pub pakar_count: usize,
}

impl AggregatedWeights {
    pub fn by_kode(&self) -> BTreeMap<String, f64> {
        self.kriteria
            .iter()
            .map(|k| (k.kode.clone(), self.by_id.get(&k.id).copied().unwrap_or(0.0)))
            .collect()
    }

    /// Weights aligned with `self.kriteria`.
    pub fn in_order(&self) -> Vec<f64> {
        self.kriteria
            .iter()
            .map(|k| self.by_id.get(&k.id).copied().unwrap_or(0.0))
            .collect()
    }
}

pub struct GetWeightsHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    bwm: Arc<dyn BwmRepository>,
}

impl GetWeightsHandler {
    pub fn new(kriteria: Arc<dyn KriteriaRepository>, bwm: Arc<dyn BwmRepository>) -> Self {
        Self { kriteria, bwm }
    }

    pub async fn handle(&self) -> Result<AggregatedWeights, DomainError> {
        let mut kriteria = self.kriteria.list().await?;
        natural_sort_by_kode(&mut kriteria, |k| k.kode.as_str());
        let stored = self.bwm.all_weights().await?;

        let ids: Vec<KriteriaId> = kriteria.iter().map(|k| k.id).collect();
        let by_id = aggregate_weights(&ids, &stored);
        let pakar_count = stored.iter().map(|b| b.pakar_id).collect::<HashSet<_>>().len();

        Ok(AggregatedWeights {
            kriteria,
            by_id,
            pakar_count,
        })
    }
}
