//! Best/worst reference and pairwise comparison sets.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::domain::foundation::{DomainError, ErrorCode, KriteriaId};

/// Lowest value on the BWM comparison scale.
pub const MIN_COMPARISON: u8 = 1;
/// Highest value on the BWM comparison scale.
pub const MAX_COMPARISON: u8 = 9;

/// The locked FGD reference: one best and one worst criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwmReference<K = KriteriaId> {
    best: K,
    worst: K,
}

impl<K: PartialEq + Copy> BwmReference<K> {
    /// Best and worst must be different criteria.
    pub fn new(best: K, worst: K) -> Result<Self, DomainError> {
        if best == worst {
            return Err(DomainError::validation(
                "worst_id",
                "Kriteria terbaik dan terburuk tidak boleh sama",
            ));
        }
        Ok(Self { best, worst })
    }

    pub fn best(&self) -> K {
        self.best
    }

    pub fn worst(&self) -> K {
        self.worst
    }
}

/// One expert's comparisons: best against every other criterion, and every
/// other criterion against worst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSet<K: Ord = KriteriaId> {
    pub best_to_others: BTreeMap<K, u8>,
    pub others_to_worst: BTreeMap<K, u8>,
}

impl<K: Ord> Default for ComparisonSet<K> {
    fn default() -> Self {
        Self {
            best_to_others: BTreeMap::new(),
            others_to_worst: BTreeMap::new(),
        }
    }
}

/// A validated comparison problem with criteria addressed by position.
#[derive(Debug, Clone, PartialEq)]
pub struct BwmProblem {
    pub best_index: usize,
    pub worst_index: usize,
    /// a_Bj for every criterion j; 1 at the best position.
    pub best_to_others: Vec<f64>,
    /// a_jW for every criterion j; 1 at the worst position.
    pub others_to_worst: Vec<f64>,
}

impl BwmProblem {
    pub fn len(&self) -> usize {
        self.best_to_others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_to_others.is_empty()
    }

    /// Largest comparison value; indexes the consistency table.
    pub fn max_comparison(&self) -> u8 {
        self.best_to_others
            .iter()
            .chain(self.others_to_worst.iter())
            .fold(MIN_COMPARISON, |acc, v| acc.max(*v as u8))
    }
}

impl<K: Ord + Copy + Display> ComparisonSet<K> {
    /// Criteria still lacking a value, as `(best_to_others, others_to_worst)`.
    pub fn missing(&self, reference: &BwmReference<K>, criteria: &[K]) -> (Vec<K>, Vec<K>) {
        let missing_best = criteria
            .iter()
            .filter(|c| **c != reference.best && !self.best_to_others.contains_key(c))
            .copied()
            .collect();
        let missing_worst = criteria
            .iter()
            .filter(|c| **c != reference.worst && !self.others_to_worst.contains_key(c))
            .copied()
            .collect();
        (missing_best, missing_worst)
    }

    /// Checks the set against the reference and the full criteria list and
    /// lays it out in `criteria` order.
    ///
    /// Every criterion except the best needs a best-to-other value, every
    /// criterion except the worst needs an other-to-worst value, all values
    /// are on the 1..=9 scale, and a self comparison of a reference may only
    /// be 1.
    pub fn validate(
        &self,
        reference: &BwmReference<K>,
        criteria: &[K],
    ) -> Result<BwmProblem, DomainError> {
        let best_index = criteria.iter().position(|c| *c == reference.best);
        let worst_index = criteria.iter().position(|c| *c == reference.worst);
        let (best_index, worst_index) = match (best_index, worst_index) {
            (Some(b), Some(w)) => (b, w),
            _ => {
                return Err(DomainError::new(
                    ErrorCode::ReferenceNotSet,
                    "Kriteria acuan terbaik/terburuk tidak ditemukan",
                ))
            }
        };

        for (map_name, map) in [
            ("best_to_others", &self.best_to_others),
            ("others_to_worst", &self.others_to_worst),
        ] {
            for (key, value) in map {
                if !criteria.contains(key) {
                    return Err(DomainError::validation(
                        map_name,
                        format!("Kriteria {} tidak dikenal", key),
                    ));
                }
                if !(MIN_COMPARISON..=MAX_COMPARISON).contains(value) {
                    return Err(DomainError::validation(
                        map_name,
                        format!(
                            "Nilai perbandingan untuk kriteria {} harus antara {} dan {}",
                            key, MIN_COMPARISON, MAX_COMPARISON
                        ),
                    ));
                }
            }
        }

        if matches!(self.best_to_others.get(&reference.best), Some(v) if *v != 1)
            || matches!(self.others_to_worst.get(&reference.worst), Some(v) if *v != 1)
        {
            return Err(DomainError::validation(
                "best_to_others",
                "Perbandingan kriteria acuan dengan dirinya sendiri harus bernilai 1",
            ));
        }

        let (missing_best, missing_worst) = self.missing(reference, criteria);
        if !missing_best.is_empty() || !missing_worst.is_empty() {
            let join = |ids: &[K]| {
                ids.iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            };
            return Err(DomainError::validation(
                "comparisons",
                "Semua perbandingan wajib diisi sebelum disimpan",
            )
            .with_detail("missing_best_to_others", join(&missing_best))
            .with_detail("missing_others_to_worst", join(&missing_worst)));
        }

        let lookup = |map: &BTreeMap<K, u8>, key: &K| f64::from(map.get(key).copied().unwrap_or(1));
        Ok(BwmProblem {
            best_index,
            worst_index,
            best_to_others: criteria
                .iter()
                .map(|c| lookup(&self.best_to_others, c))
                .collect(),
            others_to_worst: criteria
                .iter()
                .map(|c| lookup(&self.others_to_worst, c))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: i64) -> Vec<KriteriaId> {
        (1..=n).map(KriteriaId::new).collect()
    }

    fn complete_set() -> ComparisonSet {
        let k = KriteriaId::new;
        ComparisonSet {
            best_to_others: [(k(2), 2), (k(3), 4)].into_iter().collect(),
            others_to_worst: [(k(1), 4), (k(2), 2)].into_iter().collect(),
        }
    }

    fn reference() -> BwmReference {
        BwmReference::new(KriteriaId::new(1), KriteriaId::new(3)).unwrap()
    }

    #[test]
    fn reference_rejects_same_best_and_worst() {
        let err = BwmReference::new(KriteriaId::new(2), KriteriaId::new(2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn complete_set_lays_out_in_criteria_order() {
        let problem = complete_set().validate(&reference(), &ids(3)).unwrap();
        assert_eq!(problem.best_index, 0);
        assert_eq!(problem.worst_index, 2);
        assert_eq!(problem.best_to_others, vec![1.0, 2.0, 4.0]);
        assert_eq!(problem.others_to_worst, vec![4.0, 2.0, 1.0]);
        assert_eq!(problem.max_comparison(), 4);
    }

    #[test]
    fn missing_entry_blocks_submission() {
        let mut set = complete_set();
        set.others_to_worst.remove(&KriteriaId::new(2));
        let err = set.validate(&reference(), &ids(3)).unwrap_err();
        assert_eq!(
            err.details.get("missing_others_to_worst"),
            Some(&"2".to_string())
        );
    }

    #[test]
    fn reports_missing_per_map() {
        let set = ComparisonSet::default();
        let (best, worst) = set.missing(&reference(), &ids(3));
        assert_eq!(best, vec![KriteriaId::new(2), KriteriaId::new(3)]);
        assert_eq!(worst, vec![KriteriaId::new(1), KriteriaId::new(2)]);
    }

    #[test]
    fn out_of_scale_value_is_rejected() {
        let mut set = complete_set();
        set.best_to_others.insert(KriteriaId::new(3), 10);
        assert!(set.validate(&reference(), &ids(3)).is_err());
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let mut set = complete_set();
        set.best_to_others.insert(KriteriaId::new(99), 3);
        assert!(set.validate(&reference(), &ids(3)).is_err());
    }

    #[test]
    fn reference_self_entry_must_be_one() {
        let mut set = complete_set();
        set.best_to_others.insert(KriteriaId::new(1), 1);
        assert!(set.validate(&reference(), &ids(3)).is_ok());
        set.best_to_others.insert(KriteriaId::new(1), 3);
        assert!(set.validate(&reference(), &ids(3)).is_err());
    }

    #[test]
    fn reference_outside_criteria_is_not_set() {
        let reference = BwmReference::new(KriteriaId::new(1), KriteriaId::new(7)).unwrap();
        let err = complete_set().validate(&reference, &ids(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReferenceNotSet);
    }

    #[test]
    fn works_with_string_keys() {
        let reference = BwmReference::new("C1", "C2").unwrap();
        let set: ComparisonSet<&str> = ComparisonSet {
            best_to_others: [("C2", 5)].into_iter().collect(),
            others_to_worst: [("C1", 5)].into_iter().collect(),
        };
        assert!(set.validate(&reference, &["C1", "C2"]).is_ok());
    }
}
