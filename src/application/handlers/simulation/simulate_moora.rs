//! SimulateMooraHandler - ranks ad-hoc alternatives.

use std::sync::Arc;

use crate::application::handlers::bwm::GetWeightsHandler;
use crate::domain::foundation::DomainError;
use crate::domain::kriteria::Atribut;
use crate::domain::moora::{DecisionMatrix, MooraAnalysis, MooraAnalyzer};
use crate::ports::{BwmRepository, KriteriaRepository};

#[derive(Debug, Clone)]
pub struct MooraScenario {
    pub alternatives: Vec<String>,
    /// Criterion codes, one per column. Only needed for stored weights.
    pub criteria: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub types: Vec<Atribut>,
    /// Supplied weights; the aggregated expert weights are used when absent.
    pub weights: Option<Vec<f64>>,
}

impl MooraScenario {
    /// Ranks with the given weights, ignoring `self.weights`.
    pub fn rank_with(&self, weights: &[f64]) -> Result<MooraAnalysis, DomainError> {
        if self.alternatives.is_empty() {
            return Err(DomainError::validation("alternatives", "Minimal satu alternatif"));
        }
        let matrix = DecisionMatrix::new(self.matrix.clone())?;
        MooraAnalyzer::analyze(&self.alternatives, &matrix, weights, &self.types)
    }
}

pub struct SimulateMooraHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    bwm: Arc<dyn BwmRepository>,
}

impl SimulateMooraHandler {
    pub fn new(kriteria: Arc<dyn KriteriaRepository>, bwm: Arc<dyn BwmRepository>) -> Self {
        Self { kriteria, bwm }
    }

    pub async fn handle(&self, scenario: MooraScenario) -> Result<MooraAnalysis, DomainError> {
        let weights = match &scenario.weights {
            Some(weights) => weights.clone(),
            None => self.stored_weights(&scenario.criteria).await?,
        };
        scenario.rank_with(&weights)
    }

    async fn stored_weights(&self, codes: &[String]) -> Result<Vec<f64>, DomainError> {
        let by_kode = GetWeightsHandler::new(self.kriteria.clone(), self.bwm.clone())
            .handle()
            .await?
            .by_kode();
        codes
            .iter()
            .map(|code| {
                by_kode.get(code.trim()).copied().ok_or_else(|| {
                    DomainError::validation("criteria", format!("Kriteria {} tidak dikenal", code))
                })
            })
            .collect()
    }
}
