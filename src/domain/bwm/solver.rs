//! BWM Solver - weight derivation from a validated comparison problem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::consistency::{consistency_ratio, round_to};
use super::simplex::{LinearProgram, LpError};
use super::BwmProblem;

/// How weights are derived from a comparison set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BwmMethod {
    /// Linear BWM model solved exactly.
    #[default]
    Linear,
    /// Closed-form geometric mean of the two comparison vectors.
    GeometricMean,
}

impl fmt::Display for BwmMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BwmMethod::Linear => "linear",
            BwmMethod::GeometricMean => "geometric_mean",
        })
    }
}

impl FromStr for BwmMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(BwmMethod::Linear),
            "geometric_mean" => Ok(BwmMethod::GeometricMean),
            other => Err(ValidationError::invalid_format(
                "bwm_method",
                format!("unknown method '{}'", other),
            )),
        }
    }
}

/// Weights aligned with the problem's criteria order, plus consistency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BwmSolution {
    pub weights: Vec<f64>,
    /// ξ: the largest absolute deviation from perfect consistency.
    pub ksi: f64,
    pub consistency_ratio: f64,
}

impl BwmSolution {
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.consistency_ratio <= threshold
    }
}

/// BWM weight derivation.
pub struct BwmSolver;

impl BwmSolver {
    /// Solves with the chosen method. Weights are rounded to 4 decimals,
    /// ξ to 5 and the consistency ratio to 4.
    pub fn solve(problem: &BwmProblem, method: BwmMethod) -> Result<BwmSolution, DomainError> {
        if problem.is_empty() {
            return Err(DomainError::validation("kriteria", "Belum ada kriteria"));
        }
        let (weights, ksi) = match method {
            BwmMethod::Linear => Self::linear(problem)?,
            BwmMethod::GeometricMean => {
                let weights = Self::geometric_mean(problem);
                let ksi = Self::max_deviation(problem, &weights);
                (weights, ksi)
            }
        };
        let cr = consistency_ratio(ksi, problem.max_comparison());
        Ok(BwmSolution {
            weights: weights.into_iter().map(|w| round_to(w, 4)).collect(),
            ksi: round_to(ksi, 5),
            consistency_ratio: round_to(cr, 4),
        })
    }

    /// Linear BWM model.
    ///
    /// # Algorithm
    /// minimise ξ subject to
    /// - |w_B − a_Bj·w_j| ≤ ξ for every j ≠ B
    /// - |w_j − a_jW·w_W| ≤ ξ for every j ≠ W
    /// - Σ w_j = 1, w_j ≥ 0, ξ ≥ 0
    ///
    /// Each absolute value becomes two `≤` rows. Variables are the n weights
    /// followed by ξ.
    ///
    /// # Edge Cases
    /// - A single criterion gets weight 1 with ξ = 0
    /// - A perfectly consistent set yields ξ = 0
    pub fn linear(problem: &BwmProblem) -> Result<(Vec<f64>, f64), DomainError> {
        let n = problem.len();
        let ksi = n;
        let mut objective = vec![0.0; n + 1];
        objective[ksi] = 1.0;
        let mut lp = LinearProgram::minimize(objective);

        let mut add_abs = |lhs: usize, rhs: usize, factor: f64| {
            let mut upper = vec![0.0; n + 1];
            upper[lhs] += 1.0;
            upper[rhs] -= factor;
            upper[ksi] = -1.0;
            let mut lower: Vec<f64> = upper[..n].iter().map(|v| -v).collect();
            lower.push(-1.0);
            lp.add_le(upper, 0.0)?;
            lp.add_le(lower, 0.0)
        };

        let b = problem.best_index;
        let w = problem.worst_index;
        let solver_error = |e: LpError| {
            DomainError::new(ErrorCode::SolverFailed, format!("Perhitungan BWM gagal: {}", e))
        };
        for j in (0..n).filter(|&j| j != b) {
            add_abs(b, j, problem.best_to_others[j]).map_err(solver_error)?;
        }
        for j in (0..n).filter(|&j| j != w) {
            add_abs(j, w, problem.others_to_worst[j]).map_err(solver_error)?;
        }

        let mut sum = vec![1.0; n + 1];
        sum[ksi] = 0.0;
        lp.add_eq(sum, 1.0).map_err(solver_error)?;

        let solution = lp.solve().map_err(solver_error)?;
        let weights = solution.x[..n].to_vec();
        Ok((weights, solution.x[ksi]))
    }

    /// Geometric-mean estimate.
    ///
    /// # Algorithm
    /// - w1_j = 1 / a_Bj (the best criterion gets 1)
    /// - w2_j = a_jW · w1_W (the worst criterion gets w1_W)
    /// - w_j = √(w1_j · w2_j), normalised to sum to 1
    pub fn geometric_mean(problem: &BwmProblem) -> Vec<f64> {
        let w1: Vec<f64> = problem.best_to_others.iter().map(|a| 1.0 / a).collect();
        let w1_worst = w1[problem.worst_index];
        let raw: Vec<f64> = w1
            .iter()
            .zip(&problem.others_to_worst)
            .map(|(w1_j, a_jw)| (w1_j * a_jw * w1_worst).sqrt())
            .collect();
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return vec![1.0 / problem.len() as f64; problem.len()];
        }
        raw.into_iter().map(|v| v / total).collect()
    }

    /// Largest violation of the BWM consistency conditions for given weights.
    pub fn max_deviation(problem: &BwmProblem, weights: &[f64]) -> f64 {
        let wb = weights[problem.best_index];
        let ww = weights[problem.worst_index];
        weights
            .iter()
            .enumerate()
            .map(|(j, wj)| {
                let to_best = (wb - problem.best_to_others[j] * wj).abs();
                let to_worst = (wj - problem.others_to_worst[j] * ww).abs();
                to_best.max(to_worst)
            })
            .fold(0.0, f64::max)
    }
}
