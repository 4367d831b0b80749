//! SimulateIntegratedHandler - BWM weights fed straight into MOORA.

use serde::Serialize;

use crate::application::handlers::bwm::BwmOptions;
use crate::domain::foundation::DomainError;
use crate::domain::kriteria::Atribut;
use crate::domain::moora::MooraAnalysis;

use super::{BwmScenario, BwmSimulation, MooraScenario};

#[derive(Debug, Clone)]
pub struct IntegratedScenario {
    pub bwm: BwmScenario,
    pub alternatives: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub types: Vec<Atribut>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegratedSimulation {
    pub bwm: BwmSimulation,
    pub moora: MooraAnalysis,
}

pub struct SimulateIntegratedHandler {
    options: BwmOptions,
}

impl SimulateIntegratedHandler {
    pub fn new(options: BwmOptions) -> Self {
        Self { options }
    }

    pub fn handle(&self, scenario: IntegratedScenario) -> Result<IntegratedSimulation, DomainError> {
        let bwm = scenario.bwm.solve(&self.options)?;
        let moora = MooraScenario {
            alternatives: scenario.alternatives,
            criteria: scenario.bwm.criteria,
            matrix: scenario.matrix,
            types: scenario.types,
            weights: None,
        }
        .rank_with(&bwm.weights_list)?;
        Ok(IntegratedSimulation { bwm, moora })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::simulation::simulate_bwm::tests::scenario as bwm_scenario;

    fn scenario() -> IntegratedScenario {
        IntegratedScenario {
            bwm: bwm_scenario(),
            alternatives: vec!["Toko A".into(), "Toko B".into()],
            matrix: vec![vec![3.0, 5.0, 2.0], vec![4.0, 3.0, 4.0]],
            types: vec![Atribut::Cost, Atribut::Benefit, Atribut::Benefit],
        }
    }

    #[test]
    fn moora_uses_bwm_weights() {
        let result = SimulateIntegratedHandler::new(BwmOptions::default())
            .handle(scenario())
            .unwrap();

        let weights: Vec<f64> = result.moora.ranking[0]
            .detail
            .benefit_parts
            .iter()
            .map(|p| p.weight)
            .collect();
        assert_eq!(weights, result.bwm.weights_list[1..].to_vec());
        assert_eq!(result.moora.ranking.len(), 2);
    }

    #[test]
    fn matrix_width_must_match_criteria() {
        let mut s = scenario();
        s.types.pop();
        for row in &mut s.matrix {
            row.pop();
        }
        assert!(SimulateIntegratedHandler::new(BwmOptions::default())
            .handle(s)
            .is_err());
    }
}
