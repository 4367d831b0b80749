//! Best-Worst Method - criterion weights from expert comparisons.
//!
//! An expert compares the locked best criterion against every other one and
//! every other one against the locked worst criterion on a 1..=9 scale. The
//! solver turns that set into weights plus a consistency ratio.

mod comparison;
mod consistency;
mod simplex;
mod solver;
mod weights;

pub use comparison::{BwmProblem, BwmReference, ComparisonSet, MAX_COMPARISON, MIN_COMPARISON};
pub use consistency::{consistency_index, consistency_ratio, round_to, DEFAULT_CONSISTENCY_THRESHOLD};
pub use simplex::{LinearProgram, LpError, LpSolution};
pub use solver::{BwmMethod, BwmSolution, BwmSolver};
pub use weights::{aggregate_weights, BobotKriteria};
