//! Decision matrix construction and vector normalisation.

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, KriteriaId};
use crate::domain::kriteria::{Jalur, Kriteria};

/// Value used for a criterion the student has not answered, and for a
/// criterion that does not apply to a pathway.
pub const NEUTRAL_VALUE: f64 = 1.0;

/// Rows are alternatives, columns are criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl DecisionMatrix {
    /// Wraps ad-hoc rows. Every row must have the same width.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, DomainError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(idx) = rows.iter().position(|r| r.len() != columns) {
            return Err(DomainError::validation(
                "matrix",
                format!("Baris ke-{} memiliki jumlah kolom berbeda", idx + 1),
            ));
        }
        Ok(Self { rows, columns })
    }

    /// Builds the 3 × N pathway matrix for one student.
    ///
    /// `kriteria` fixes the column order. A missing value counts as
    /// [`NEUTRAL_VALUE`].
    pub fn for_jalur(kriteria: &[Kriteria], values: &HashMap<KriteriaId, f64>) -> Self {
        let rows = Jalur::ALL
            .iter()
            .map(|jalur| {
                kriteria
                    .iter()
                    .map(|k| {
                        let value = values.get(&k.id).copied().unwrap_or(NEUTRAL_VALUE);
                        cell_value(k, *jalur, value)
                    })
                    .collect()
            })
            .collect();
        Self {
            rows,
            columns: kriteria.len(),
        }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// `√(Σ_i x_ij²)` for every column.
    pub fn divisors(&self) -> Vec<f64> {
        (0..self.columns)
            .map(|j| self.rows.iter().map(|r| r[j] * r[j]).sum::<f64>().sqrt())
            .collect()
    }

    /// Vector-normalised copy. A column whose divisor is 0 normalises to 0.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        let divisors = self.divisors();
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&divisors)
                    .map(|(x, d)| if *d > 0.0 { x / d } else { 0.0 })
                    .collect()
            })
            .collect()
    }
}

/// Matrix cell for one criterion and pathway.
///
/// A criterion that does not target the pathway is neutral. A targeted one
/// uses the raw value, or `(skala_maks + 1) − value` when the pathway is in
/// its reverse set.
pub fn cell_value(kriteria: &Kriteria, jalur: Jalur, value: f64) -> f64 {
    if !kriteria.target_jalur.contains(jalur) {
        return NEUTRAL_VALUE;
    }
    if kriteria.jalur_reverse.contains(jalur) {
        (kriteria.skala_maks + 1.0) - value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kriteria::{test_draft, JalurSet, TipeInputKind};

    fn kriteria(id: i64, targets: &[Jalur], reverse: &[Jalur]) -> Kriteria {
        let mut draft = test_draft(&format!("C{}", id), TipeInputKind::Likert);
        draft.target_jalur = JalurSet::of(targets);
        draft.jalur_reverse = JalurSet::of(reverse);
        Kriteria::from_definition(KriteriaId::new(id), draft.validate().unwrap())
    }

    #[test]
    fn untargeted_pathway_is_neutral() {
        let k = kriteria(1, &[Jalur::Studi], &[]);
        assert_eq!(cell_value(&k, Jalur::Studi, 4.0), 4.0);
        assert_eq!(cell_value(&k, Jalur::Kerja, 4.0), 1.0);
    }

    #[test]
    fn reverse_pathway_inverts_on_scale() {
        let k = kriteria(1, &Jalur::ALL, &[Jalur::Kerja]);
        assert_eq!(cell_value(&k, Jalur::Kerja, 1.0), 5.0);
        assert_eq!(cell_value(&k, Jalur::Studi, 1.0), 1.0);
    }

    #[test]
    fn missing_answer_counts_as_one() {
        let ks = vec![kriteria(1, &Jalur::ALL, &[])];
        let matrix = DecisionMatrix::for_jalur(&ks, &HashMap::new());
        assert_eq!(matrix.rows(), &[vec![1.0], vec![1.0], vec![1.0]]);
    }

    #[test]
    fn normalises_by_column_length() {
        let matrix = DecisionMatrix::new(vec![vec![3.0, 0.0], vec![4.0, 0.0]]).unwrap();
        assert_eq!(matrix.divisors(), vec![5.0, 0.0]);
        assert_eq!(matrix.normalized(), vec![vec![0.6, 0.0], vec![0.8, 0.0]]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(DecisionMatrix::new(vec![vec![1.0, 2.0], vec![1.0]]).is_err());
    }
}
