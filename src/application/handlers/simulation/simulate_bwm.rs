//! SimulateBwmHandler - solves a comparison set keyed by free-form names.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::application::handlers::bwm::BwmOptions;
use crate::domain::bwm::{BwmReference, BwmSolver, ComparisonSet};
use crate::domain::foundation::DomainError;

/// Criteria by name, reference by position, and one value per criterion for
/// each comparison vector. The self entries of the reference are ignored.
#[derive(Debug, Clone)]
pub struct BwmScenario {
    pub criteria: Vec<String>,
    pub best_idx: usize,
    pub worst_idx: usize,
    pub ab_values: Vec<u8>,
    pub aw_values: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BwmSimulation {
    pub weights_dict: BTreeMap<String, f64>,
    /// Weights in scenario order.
    pub weights_list: Vec<f64>,
    pub xi: f64,
    pub cr: f64,
    pub konsisten: bool,
}

impl BwmScenario {
    fn check_shape(&self) -> Result<(), DomainError> {
        let n = self.criteria.len();
        if n == 0 {
            return Err(DomainError::validation("criteria", "Minimal satu kriteria"));
        }
        let mut seen = HashSet::new();
        for name in &self.criteria {
            let name = name.trim();
            if name.is_empty() {
                return Err(DomainError::validation("criteria", "Nama kriteria wajib diisi"));
            }
            if !seen.insert(name) {
                return Err(DomainError::validation(
                    "criteria",
                    format!("Nama kriteria {} duplikat", name),
                ));
            }
        }
        if self.ab_values.len() != n || self.aw_values.len() != n {
            return Err(DomainError::validation(
                "ab_values",
                "Jumlah nilai perbandingan harus sama dengan jumlah kriteria",
            ));
        }
        if self.best_idx >= n || self.worst_idx >= n {
            return Err(DomainError::validation(
                "best_idx",
                "Indeks kriteria terbaik/terburuk di luar jangkauan",
            ));
        }
        Ok(())
    }

    /// Validates and solves with `options`.
    pub fn solve(&self, options: &BwmOptions) -> Result<BwmSimulation, DomainError> {
        self.check_shape()?;
        let names: Vec<&str> = self.criteria.iter().map(|c| c.trim()).collect();
        let reference = BwmReference::new(names[self.best_idx], names[self.worst_idx])?;

        let mut set: ComparisonSet<&str> = ComparisonSet::default();
        for (j, name) in names.iter().enumerate() {
            if j != self.best_idx {
                set.best_to_others.insert(*name, self.ab_values[j]);
            }
            if j != self.worst_idx {
                set.others_to_worst.insert(*name, self.aw_values[j]);
            }
        }
        let problem = set.validate(&reference, &names)?;
        let solution = BwmSolver::solve(&problem, options.method)?;

        Ok(BwmSimulation {
            weights_dict: names
                .iter()
                .zip(&solution.weights)
                .map(|(name, w)| (name.to_string(), *w))
                .collect(),
            konsisten: solution.is_consistent(options.consistency_threshold),
            weights_list: solution.weights,
            xi: solution.ksi,
            cr: solution.consistency_ratio,
        })
    }
}

pub struct SimulateBwmHandler {
    options: BwmOptions,
}

impl SimulateBwmHandler {
    pub fn new(options: BwmOptions) -> Self {
        Self { options }
    }

    pub fn handle(&self, scenario: BwmScenario) -> Result<BwmSimulation, DomainError> {
        scenario.solve(&self.options)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn scenario() -> BwmScenario {
        BwmScenario {
            criteria: vec!["Harga".into(), "Kualitas".into(), "Lokasi".into()],
            best_idx: 1,
            worst_idx: 2,
            ab_values: vec![2, 1, 4],
            aw_values: vec![2, 4, 1],
        }
    }

    #[test]
    fn solves_consistent_scenario() {
        let sim = SimulateBwmHandler::new(BwmOptions::default())
            .handle(scenario())
            .unwrap();
        assert!((sim.weights_dict["Kualitas"] - 0.5714).abs() < 1e-3);
        assert!((sim.weights_dict["Harga"] - 0.2857).abs() < 1e-3);
        assert!((sim.weights_list[2] - 0.1429).abs() < 1e-3);
        assert_eq!(sim.xi, 0.0);
        assert!(sim.konsisten);
    }

    #[test]
    fn self_entries_are_ignored() {
        let mut s = scenario();
        s.ab_values[1] = 7;
        s.aw_values[2] = 9;
        assert!(SimulateBwmHandler::new(BwmOptions::default()).handle(s).is_ok());
    }

    #[test]
    fn same_best_and_worst_is_rejected() {
        let mut s = scenario();
        s.worst_idx = 1;
        assert!(SimulateBwmHandler::new(BwmOptions::default()).handle(s).is_err());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut s = scenario();
        s.aw_values.pop();
        let err = SimulateBwmHandler::new(BwmOptions::default())
            .handle(s)
            .unwrap_err();
        assert_eq!(err.message, "Jumlah nilai perbandingan harus sama dengan jumlah kriteria");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut s = scenario();
        s.criteria[2] = " Harga ".into();
        assert!(SimulateBwmHandler::new(BwmOptions::default()).handle(s).is_err());
    }

    #[test]
    fn out_of_scale_value_is_rejected() {
        let mut s = scenario();
        s.ab_values[0] = 12;
        assert!(SimulateBwmHandler::new(BwmOptions::default()).handle(s).is_err());
    }
}
