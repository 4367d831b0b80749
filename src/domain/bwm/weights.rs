//! Stored criterion weights and their aggregation across experts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{KriteriaId, UserId};

/// One expert's weight for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BobotKriteria {
    pub kriteria_id: KriteriaId,
    pub pakar_id: UserId,
    pub nilai_bobot: f64,
}

impl BobotKriteria {
    pub fn new(kriteria_id: KriteriaId, pakar_id: UserId, nilai_bobot: f64) -> Self {
        Self {
            kriteria_id,
            pakar_id,
            nilai_bobot,
        }
    }
}

/// Mean weight per criterion over every expert who submitted one.
///
/// A criterion nobody has weighed yet gets `1/n`, so the ranking still runs
/// before the first BWM submission. Stored weights for criteria not in
/// `criteria` are ignored.
pub fn aggregate_weights(criteria: &[KriteriaId], stored: &[BobotKriteria]) -> BTreeMap<KriteriaId, f64> {
    if criteria.is_empty() {
        return BTreeMap::new();
    }
    let uniform = 1.0 / criteria.len() as f64;

    let mut sums: BTreeMap<KriteriaId, (f64, usize)> = BTreeMap::new();
    for bobot in stored {
        let entry = sums.entry(bobot.kriteria_id).or_insert((0.0, 0));
        entry.0 += bobot.nilai_bobot;
        entry.1 += 1;
    }

    criteria
        .iter()
        .map(|id| {
            let weight = match sums.get(id) {
                Some((sum, count)) if *count > 0 => sum / *count as f64,
                _ => uniform,
            };
            (*id, weight)
        })
        .collect()
}
