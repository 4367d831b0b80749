//! MOORA - ranks the three career pathways for a student.
//!
//! The decision matrix has one row per pathway and one column per criterion.
//! Columns are vector-normalised, weighted by the aggregated BWM weights and
//! summed as benefit minus cost.

mod analyzer;
mod matrix;

pub use analyzer::{
    argmax, MooraAnalysis, MooraAnalyzer, MooraOutcome, RankedAlternative, ScoreDetail, ScorePart,
    SkorJalur, SkorPersen,
};
pub use matrix::{cell_value, DecisionMatrix, NEUTRAL_VALUE};
