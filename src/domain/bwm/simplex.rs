//! Dense two-phase simplex for small linear programs.
//!
//! Minimises `c·x` subject to `A_ub·x ≤ b_ub`, `A_eq·x = b_eq`, `x ≥ 0`.
//! Bland's rule picks entering and leaving variables, which keeps the
//! highly degenerate BWM programs (every inequality has a zero right-hand
//! side) from cycling.

use thiserror::Error;

const EPS: f64 = 1e-9;
const MAX_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LpError {
    #[error("linear program is infeasible")]
    Infeasible,

    #[error("linear program is unbounded")]
    Unbounded,

    #[error("simplex iteration limit reached")]
    IterationLimit,

    #[error("constraint has {actual} coefficients, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Optimal point and objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    pub x: Vec<f64>,
    pub objective: f64,
}

/// A minimisation problem over non-negative variables.
#[derive(Debug, Clone)]
pub struct LinearProgram {
    objective: Vec<f64>,
    upper: Vec<(Vec<f64>, f64)>,
    equal: Vec<(Vec<f64>, f64)>,
}

impl LinearProgram {
    pub fn minimize(objective: Vec<f64>) -> Self {
        Self {
            objective,
            upper: Vec::new(),
            equal: Vec::new(),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Adds `coeffs·x ≤ rhs`.
    pub fn add_le(&mut self, coeffs: Vec<f64>, rhs: f64) -> Result<(), LpError> {
        self.check_width(&coeffs)?;
        self.upper.push((coeffs, rhs));
        Ok(())
    }

    /// Adds `coeffs·x = rhs`.
    pub fn add_eq(&mut self, coeffs: Vec<f64>, rhs: f64) -> Result<(), LpError> {
        self.check_width(&coeffs)?;
        self.equal.push((coeffs, rhs));
        Ok(())
    }

    fn check_width(&self, coeffs: &[f64]) -> Result<(), LpError> {
        if coeffs.len() != self.num_vars() {
            return Err(LpError::DimensionMismatch {
                expected: self.num_vars(),
                actual: coeffs.len(),
            });
        }
        Ok(())
    }

    pub fn solve(&self) -> Result<LpSolution, LpError> {
        let mut tableau = Tableau::build(self);

        // Phase 1: drive the artificial variables to zero.
        if tableau.art_count > 0 {
            let mut phase_one = vec![0.0; tableau.width()];
            for cost in &mut phase_one[tableau.art_start..tableau.art_start + tableau.art_count] {
                *cost = 1.0;
            }
            tableau.set_objective(&phase_one);
            tableau.run(tableau.art_start + tableau.art_count)?;
            if tableau.objective_value() > 1e-7 {
                return Err(LpError::Infeasible);
            }
            tableau.evict_artificials();
        }

        // Phase 2: original objective, artificial columns frozen out.
        let mut costs = vec![0.0; tableau.width()];
        costs[..self.num_vars()].copy_from_slice(&self.objective);
        tableau.set_objective(&costs);
        tableau.run(tableau.art_start)?;

        let mut x = vec![0.0; self.num_vars()];
        for (row, &var) in tableau.basis.iter().enumerate() {
            if var < x.len() {
                x[var] = tableau.rows[row][tableau.rhs()].max(0.0);
            }
        }
        Ok(LpSolution {
            objective: tableau.objective_value(),
            x,
        })
    }
}

/// Simplex tableau. Column layout: original, slack/surplus, artificial, rhs.
struct Tableau {
    rows: Vec<Vec<f64>>,
    /// Reduced costs; the rhs cell holds the negated objective value.
    obj: Vec<f64>,
    basis: Vec<usize>,
    art_start: usize,
    art_count: usize,
}

impl Tableau {
    fn build(lp: &LinearProgram) -> Self {
        let n = lp.num_vars();
        let slack_count = lp.upper.len();
        let art_count = lp.upper.iter().filter(|(_, b)| *b < 0.0).count() + lp.equal.len();
        let art_start = n + slack_count;
        let width = art_start + art_count + 1;

        let mut rows = Vec::with_capacity(slack_count + lp.equal.len());
        let mut basis = Vec::with_capacity(rows.capacity());
        let mut next_art = art_start;

        for (i, (coeffs, rhs)) in lp.upper.iter().enumerate() {
            let mut row = vec![0.0; width];
            let sign = if *rhs < 0.0 { -1.0 } else { 1.0 };
            for (cell, a) in row.iter_mut().zip(coeffs) {
                *cell = sign * a;
            }
            row[n + i] = sign;
            row[width - 1] = sign * rhs;
            if sign < 0.0 {
                row[next_art] = 1.0;
                basis.push(next_art);
                next_art += 1;
            } else {
                basis.push(n + i);
            }
            rows.push(row);
        }

        for (coeffs, rhs) in &lp.equal {
            let mut row = vec![0.0; width];
            let sign = if *rhs < 0.0 { -1.0 } else { 1.0 };
            for (cell, a) in row.iter_mut().zip(coeffs) {
                *cell = sign * a;
            }
            row[next_art] = 1.0;
            row[width - 1] = sign * rhs;
            basis.push(next_art);
            next_art += 1;
            rows.push(row);
        }

        Self {
            rows,
            obj: vec![0.0; width],
            basis,
            art_start,
            art_count,
        }
    }

    fn width(&self) -> usize {
        self.obj.len()
    }

    fn rhs(&self) -> usize {
        self.width() - 1
    }

    fn objective_value(&self) -> f64 {
        -self.obj[self.rhs()]
    }

    /// Loads costs and prices out the current basis.
    fn set_objective(&mut self, costs: &[f64]) {
        self.obj = costs.to_vec();
        self.obj.resize(self.width(), 0.0);
        for (row, &var) in self.rows.iter().zip(&self.basis) {
            let cost = costs.get(var).copied().unwrap_or(0.0);
            if cost != 0.0 {
                for (o, v) in self.obj.iter_mut().zip(row) {
                    *o -= cost * v;
                }
            }
        }
    }

    /// Iterates until no column below `column_limit` improves the objective.
    fn run(&mut self, column_limit: usize) -> Result<(), LpError> {
        for _ in 0..MAX_ITERATIONS {
            let entering = match (0..column_limit).find(|&j| self.obj[j] < -EPS) {
                Some(col) => col,
                None => return Ok(()),
            };

            let rhs = self.rhs();
            let mut leaving: Option<(usize, f64)> = None;
            for (i, row) in self.rows.iter().enumerate() {
                let a = row[entering];
                if a <= EPS {
                    continue;
                }
                let ratio = row[rhs] / a;
                leaving = match leaving {
                    None => Some((i, ratio)),
                    Some((best, best_ratio)) => {
                        if ratio < best_ratio - EPS
                            || (ratio <= best_ratio + EPS && self.basis[i] < self.basis[best])
                        {
                            Some((i, ratio))
                        } else {
                            Some((best, best_ratio))
                        }
                    }
                };
            }

            match leaving {
                Some((row, _)) => self.pivot(row, entering),
                None => return Err(LpError::Unbounded),
            }
        }
        Err(LpError::IterationLimit)
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let pivot = self.rows[row][col];
        for v in self.rows[row].iter_mut() {
            *v /= pivot;
        }
        let pivot_row = self.rows[row].clone();

        for (i, other) in self.rows.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = other[col];
            if factor != 0.0 {
                for (v, p) in other.iter_mut().zip(&pivot_row) {
                    *v -= factor * p;
                }
            }
        }

        let factor = self.obj[col];
        if factor != 0.0 {
            for (v, p) in self.obj.iter_mut().zip(&pivot_row) {
                *v -= factor * p;
            }
        }

        let rhs = self.rhs();
        for r in self.rows.iter_mut() {
            if r[rhs].abs() < EPS {
                r[rhs] = 0.0;
            }
        }
        self.basis[row] = col;
    }

    /// After phase 1, pivots zero-level artificials out of the basis and
    /// drops rows that turned out to be redundant.
    fn evict_artificials(&mut self) {
        let art_end = self.art_start + self.art_count;
        let mut redundant = Vec::new();
        for row in 0..self.rows.len() {
            let var = self.basis[row];
            if var < self.art_start || var >= art_end {
                continue;
            }
            let replacement = (0..self.art_start).find(|&j| self.rows[row][j].abs() > EPS);
            match replacement {
                Some(col) => self.pivot(row, col),
                None => redundant.push(row),
            }
        }
        for row in redundant.into_iter().rev() {
            self.rows.remove(row);
            self.basis.remove(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn solves_textbook_minimum() {
        // min -x - y  s.t. x + 2y <= 4, 3x + y <= 6  => x = 1.6, y = 1.2
        let mut lp = LinearProgram::minimize(vec![-1.0, -1.0]);
        lp.add_le(vec![1.0, 2.0], 4.0).unwrap();
        lp.add_le(vec![3.0, 1.0], 6.0).unwrap();
        let sol = lp.solve().unwrap();
        assert!(close(sol.x[0], 1.6));
        assert!(close(sol.x[1], 1.2));
        assert!(close(sol.objective, -2.8));
    }

    #[test]
    fn handles_equality_constraints() {
        // min x + 2y  s.t. x + y = 1  => x = 1, y = 0
        let mut lp = LinearProgram::minimize(vec![1.0, 2.0]);
        lp.add_eq(vec![1.0, 1.0], 1.0).unwrap();
        let sol = lp.solve().unwrap();
        assert!(close(sol.x[0], 1.0));
        assert!(close(sol.x[1], 0.0));
        assert!(close(sol.objective, 1.0));
    }

    #[test]
    fn handles_negative_rhs_inequality() {
        // min x  s.t. -x <= -2  (x >= 2)
        let mut lp = LinearProgram::minimize(vec![1.0]);
        lp.add_le(vec![-1.0], -2.0).unwrap();
        let sol = lp.solve().unwrap();
        assert!(close(sol.x[0], 2.0));
    }

    #[test]
    fn detects_infeasibility() {
        let mut lp = LinearProgram::minimize(vec![1.0]);
        lp.add_eq(vec![1.0], 1.0).unwrap();
        lp.add_le(vec![1.0], 0.5).unwrap();
        assert_eq!(lp.solve(), Err(LpError::Infeasible));
    }

    #[test]
    fn detects_unboundedness() {
        let mut lp = LinearProgram::minimize(vec![-1.0]);
        lp.add_le(vec![-1.0], 0.0).unwrap();
        assert_eq!(lp.solve(), Err(LpError::Unbounded));
    }

    #[test]
    fn tolerates_redundant_equalities() {
        let mut lp = LinearProgram::minimize(vec![1.0, 1.0]);
        lp.add_eq(vec![1.0, 1.0], 1.0).unwrap();
        lp.add_eq(vec![2.0, 2.0], 2.0).unwrap();
        let sol = lp.solve().unwrap();
        assert!(close(sol.x[0] + sol.x[1], 1.0));
    }

    #[test]
    fn rejects_wrong_width() {
        let mut lp = LinearProgram::minimize(vec![1.0, 1.0]);
        assert_eq!(
            lp.add_le(vec![1.0], 1.0),
            Err(LpError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
