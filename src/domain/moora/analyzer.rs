//! MOORA ratio-system scoring and ranking.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::bwm::round_to;
use crate::domain::foundation::{DomainError, KriteriaId, Percentage};
use crate::domain::kriteria::{Atribut, Jalur, Kriteria};

use super::DecisionMatrix;

/// Optimisation score of each pathway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkorJalur {
    pub studi: f64,
    pub kerja: f64,
    pub wirausaha: f64,
}

impl SkorJalur {
    /// Scores in alternative order.
    pub fn from_scores(scores: [f64; 3]) -> Self {
        Self {
            studi: scores[0],
            kerja: scores[1],
            wirausaha: scores[2],
        }
    }

    pub fn get(&self, jalur: Jalur) -> f64 {
        match jalur {
            Jalur::Studi => self.studi,
            Jalur::Kerja => self.kerja,
            Jalur::Wirausaha => self.wirausaha,
        }
    }

    /// Highest scoring pathway; ties go to the earlier alternative.
    pub fn best(&self) -> Jalur {
        Jalur::ALL[argmax(&[self.studi, self.kerja, self.wirausaha])]
    }

    pub fn highest(&self) -> f64 {
        self.get(self.best())
    }

    pub fn percentages(&self) -> SkorPersen {
        SkorPersen {
            studi: Percentage::from_score(self.studi),
            kerja: Percentage::from_score(self.kerja),
            wirausaha: Percentage::from_score(self.wirausaha),
        }
    }
}

/// Scores mapped to display percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkorPersen {
    pub studi: Percentage,
    pub kerja: Percentage,
    pub wirausaha: Percentage,
}

/// Index of the first maximum. NaN never wins.
pub fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (idx, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] || scores[best].is_nan() {
            best = idx;
        }
    }
    best
}

/// Ranking outcome for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct MooraOutcome {
    pub skor: SkorJalur,
    pub keputusan: Jalur,
}

/// One weighted term of an alternative's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePart {
    pub normalized: f64,
    pub weight: f64,
}

/// Benefit and cost terms behind one score.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScoreDetail {
    pub benefit_parts: Vec<ScorePart>,
    pub cost_parts: Vec<ScorePart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub detail: ScoreDetail,
}

/// Every intermediate of a MOORA run, for the simulation screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MooraAnalysis {
    pub divisors: Vec<f64>,
    pub matrix_norm: Vec<Vec<f64>>,
    pub ranking: Vec<RankedAlternative>,
}

/// MOORA ratio system.
pub struct MooraAnalyzer;

impl MooraAnalyzer {
    /// `y_i = Σ_benefit w_j·x̂_ij − Σ_cost w_j·x̂_ij`.
    ///
    /// # Errors
    ///
    /// `weights` and `atribut` must both have one entry per matrix column.
    pub fn scores(
        matrix: &DecisionMatrix,
        weights: &[f64],
        atribut: &[Atribut],
    ) -> Result<Vec<f64>, DomainError> {
        Ok(Self::detailed(matrix, weights, atribut)?
            .into_iter()
            .map(|(score, _)| score)
            .collect())
    }

    /// Full analysis over named alternatives. Scores are rounded to 4
    /// decimals and the ranking is stable, so equal scores keep input order.
    pub fn analyze(
        alternatives: &[String],
        matrix: &DecisionMatrix,
        weights: &[f64],
        atribut: &[Atribut],
    ) -> Result<MooraAnalysis, DomainError> {
        if alternatives.len() != matrix.row_count() {
            return Err(DomainError::validation(
                "alternatives",
                "Jumlah alternatif tidak sesuai dengan jumlah baris matriks",
            ));
        }
        let scored = Self::detailed(matrix, weights, atribut)?;

        let mut order: Vec<usize> = (0..scored.len()).collect();
        let rounded: Vec<f64> = scored.iter().map(|(s, _)| round_to(*s, 4)).collect();
        order.sort_by(|a, b| rounded[*b].total_cmp(&rounded[*a]));

        let mut details: Vec<Option<ScoreDetail>> =
            scored.into_iter().map(|(_, detail)| Some(detail)).collect();
        let ranking = order
            .into_iter()
            .enumerate()
            .map(|(pos, idx)| RankedAlternative {
                rank: pos + 1,
                name: alternatives[idx].clone(),
                score: rounded[idx],
                detail: details[idx].take().unwrap_or_default(),
            })
            .collect();

        Ok(MooraAnalysis {
            divisors: matrix.divisors().into_iter().map(|d| round_to(d, 4)).collect(),
            matrix_norm: matrix.normalized(),
            ranking,
        })
    }

    /// Ranks the three pathways for one student.
    ///
    /// Criteria without an aggregated weight contribute nothing.
    pub fn rank_jalur(
        kriteria: &[Kriteria],
        values: &HashMap<KriteriaId, f64>,
        weights: &BTreeMap<KriteriaId, f64>,
    ) -> MooraOutcome {
        let matrix = DecisionMatrix::for_jalur(kriteria, values);
        let w: Vec<f64> = kriteria
            .iter()
            .map(|k| weights.get(&k.id).copied().unwrap_or(0.0))
            .collect();
        let atribut: Vec<Atribut> = kriteria.iter().map(|k| k.atribut).collect();

        let scores = match Self::scores(&matrix, &w, &atribut) {
            Ok(scores) => scores,
            // Dimensions are derived from `kriteria` above and always agree.
            Err(_) => vec![0.0; Jalur::ALL.len()],
        };
        let skor = SkorJalur::from_scores([scores[0], scores[1], scores[2]]);
        MooraOutcome {
            keputusan: skor.best(),
            skor,
        }
    }

    fn detailed(
        matrix: &DecisionMatrix,
        weights: &[f64],
        atribut: &[Atribut],
    ) -> Result<Vec<(f64, ScoreDetail)>, DomainError> {
        let columns = matrix.column_count();
        if weights.len() != columns || atribut.len() != columns {
            return Err(DomainError::validation(
                "weights",
                format!(
                    "Jumlah bobot ({}) dan tipe ({}) harus sama dengan jumlah kriteria ({})",
                    weights.len(),
                    atribut.len(),
                    columns
                ),
            ));
        }

        Ok(matrix
            .normalized()
            .into_iter()
            .map(|row| {
                let mut detail = ScoreDetail::default();
                let mut score = 0.0;
                for ((x, w), a) in row.into_iter().zip(weights).zip(atribut) {
                    let part = ScorePart {
                        normalized: x,
                        weight: *w,
                    };
                    match a {
                        Atribut::Benefit => {
                            score += x * w;
                            detail.benefit_parts.push(part);
                        }
                        Atribut::Cost => {
                            score -= x * w;
                            detail.cost_parts.push(part);
                        }
                    }
                }
                (score, detail)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kriteria::{test_draft, JalurSet, TipeInputKind};

    fn kriteria(id: i64, atribut: Atribut, targets: &[Jalur], reverse: &[Jalur]) -> Kriteria {
        let mut draft = test_draft(&format!("C{}", id), TipeInputKind::Number);
        draft.atribut = atribut;
        draft.skala_maks = 100.0;
        draft.target_jalur = JalurSet::of(targets);
        draft.jalur_reverse = JalurSet::of(reverse);
        Kriteria::from_definition(KriteriaId::new(id), draft.validate().unwrap())
    }

    fn even_weights(ks: &[Kriteria]) -> BTreeMap<KriteriaId, f64> {
        ks.iter().map(|k| (k.id, 1.0 / ks.len() as f64)).collect()
    }

    #[test]
    fn pathway_specific_benefit_decides() {
        let ks = vec![
            kriteria(1, Atribut::Benefit, &Jalur::ALL, &[]),
            kriteria(2, Atribut::Benefit, &[Jalur::Studi], &[]),
        ];
        let values = HashMap::from([(KriteriaId::new(1), 80.0), (KriteriaId::new(2), 4.0)]);
        let outcome = MooraAnalyzer::rank_jalur(&ks, &values, &even_weights(&ks));
        assert_eq!(outcome.keputusan, Jalur::Studi);
        assert!(outcome.skor.studi > outcome.skor.kerja);
        assert_eq!(outcome.skor.kerja, outcome.skor.wirausaha);
    }

    #[test]
    fn reverse_pathway_flips_preference() {
        let mut ekonomi = kriteria(1, Atribut::Benefit, &Jalur::ALL, &[Jalur::Kerja]);
        ekonomi.skala_maks = 5.0;
        let values = HashMap::from([(KriteriaId::new(1), 1.0)]);
        let ks = vec![ekonomi];
        let outcome = MooraAnalyzer::rank_jalur(&ks, &values, &even_weights(&ks));
        assert_eq!(outcome.keputusan, Jalur::Kerja);
    }

    #[test]
    fn cost_criterion_penalises_targeted_pathways() {
        let ks = vec![kriteria(1, Atribut::Cost, &[Jalur::Studi, Jalur::Wirausaha], &[])];
        let values = HashMap::from([(KriteriaId::new(1), 5.0)]);
        let outcome = MooraAnalyzer::rank_jalur(&ks, &values, &even_weights(&ks));
        assert_eq!(outcome.keputusan, Jalur::Kerja);
        assert!(outcome.skor.kerja < 0.0);
    }

    #[test]
    fn ties_go_to_alternative_order() {
        let ks = vec![kriteria(1, Atribut::Benefit, &Jalur::ALL, &[])];
        let values = HashMap::from([(KriteriaId::new(1), 50.0)]);
        let outcome = MooraAnalyzer::rank_jalur(&ks, &values, &even_weights(&ks));
        assert_eq!(outcome.keputusan, Jalur::Studi);
        assert_eq!(argmax(&[0.2, 0.5, 0.5]), 1);
    }

    #[test]
    fn unweighted_criteria_contribute_nothing() {
        let ks = vec![kriteria(1, Atribut::Benefit, &[Jalur::Wirausaha], &[])];
        let values = HashMap::from([(KriteriaId::new(1), 90.0)]);
        let outcome = MooraAnalyzer::rank_jalur(&ks, &values, &BTreeMap::new());
        assert_eq!(outcome.skor, SkorJalur::from_scores([0.0, 0.0, 0.0]));
    }

    #[test]
    fn analysis_ranks_descending() {
        let matrix = DecisionMatrix::new(vec![vec![1.0, 3.0], vec![4.0, 1.0], vec![2.0, 2.0]]).unwrap();
        let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let analysis = MooraAnalyzer::analyze(
            &names,
            &matrix,
            &[0.7, 0.3],
            &[Atribut::Benefit, Atribut::Cost],
        )
        .unwrap();
        let order: Vec<&str> = analysis.ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
        assert_eq!(analysis.ranking[0].rank, 1);
        assert_eq!(analysis.ranking[0].detail.cost_parts.len(), 1);
        assert_eq!(analysis.divisors.len(), 2);
    }

    #[test]
    fn analysis_rejects_mismatched_weights() {
        let matrix = DecisionMatrix::new(vec![vec![1.0, 3.0]]).unwrap();
        let names = vec!["A".to_string()];
        assert!(MooraAnalyzer::analyze(&names, &matrix, &[1.0], &[Atribut::Benefit]).is_err());
    }

    #[test]
    fn percentages_are_clamped() {
        let skor = SkorJalur::from_scores([1.2, 0.5, -0.1]);
        let persen = skor.percentages();
        assert_eq!(persen.studi.value(), 100.0);
        assert_eq!(persen.wirausaha.value(), 0.0);
    }
}
