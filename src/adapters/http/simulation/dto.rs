//! Wire shapes for simulations.

use serde::{Deserialize, Serialize};

use crate::application::handlers::simulation::{
    BwmScenario, BwmSimulation, IntegratedScenario, MooraScenario,
};
use crate::domain::kriteria::Atribut;

#[derive(Debug, Clone, Deserialize)]
pub struct BwmSimulationRequest {
    pub criteria: Vec<String>,
    pub best_idx: usize,
    pub worst_idx: usize,
    pub ab_values: Vec<u8>,
    pub aw_values: Vec<u8>,
}

impl From<BwmSimulationRequest> for BwmScenario {
    fn from(req: BwmSimulationRequest) -> Self {
        BwmScenario {
            criteria: req.criteria,
            best_idx: req.best_idx,
            worst_idx: req.worst_idx,
            ab_values: req.ab_values,
            aw_values: req.aw_values,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BwmSimulationResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: BwmSimulation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MooraSimulationRequest {
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub criteria: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub types: Vec<Atribut>,
    /// Omit to use the stored expert weights.
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

impl From<MooraSimulationRequest> for MooraScenario {
    fn from(req: MooraSimulationRequest) -> Self {
        MooraScenario {
            alternatives: req.alternatives,
            criteria: req.criteria,
            matrix: req.matrix,
            types: req.types,
            weights: req.weights,
        }
    }
}

/// BWM fields and MOORA fields in one body.
#[derive(Debug, Clone, Deserialize)]
pub struct IntegratedSimulationRequest {
    #[serde(flatten)]
    pub bwm: BwmSimulationRequest,
    pub alternatives: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub types: Vec<Atribut>,
}

impl From<IntegratedSimulationRequest> for IntegratedScenario {
    fn from(req: IntegratedSimulationRequest) -> Self {
        IntegratedScenario {
            bwm: req.bwm.into(),
            alternatives: req.alternatives,
            matrix: req.matrix,
            types: req.types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrated_body_splits_into_both_parts() {
        let req: IntegratedSimulationRequest = serde_json::from_str(
            r#"{
                "criteria": ["Nilai", "Minat"],
                "best_idx": 0, "worst_idx": 1,
                "ab_values": [1, 3], "aw_values": [3, 1],
                "alternatives": ["Studi", "Kerja"],
                "matrix": [[80, 4], [70, 5]],
                "types": ["benefit", "cost"]
            }"#,
        )
        .unwrap();
        let scenario = IntegratedScenario::from(req);
        assert_eq!(scenario.bwm.criteria.len(), 2);
        assert_eq!(scenario.types, vec![Atribut::Benefit, Atribut::Cost]);
    }
}
