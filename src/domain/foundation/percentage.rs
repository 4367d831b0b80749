//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A progress-bar width between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Self = Self(0.0);
    pub const HUNDRED: Self = Self(100.0);

    /// Maps a score to a bar width: `min(score * 100, 100)`.
    ///
    /// Scores above 1 can come out of MOORA when a single criterion dominates
    /// the normalisation, and cost-heavy pathways can go negative, so both
    /// ends are clamped. NaN maps to zero.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Self::ZERO;
        }
        Self((score * 100.0).clamp(0.0, 100.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamps_scores_above_one() {
        assert_eq!(Percentage::from_score(1.2), Percentage::HUNDRED);
    }

    #[test]
    fn scales_fractional_scores() {
        assert!((Percentage::from_score(0.425).value() - 42.5).abs() < 1e-9);
    }

    #[test]
    fn floors_negative_scores() {
        assert_eq!(Percentage::from_score(-0.3), Percentage::ZERO);
    }

    #[test]
    fn nan_is_zero() {
        assert_eq!(Percentage::from_score(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn displays_rounded_percent() {
        assert_eq!(Percentage::from_score(0.5).to_string(), "50%");
    }

    proptest! {
        #[test]
        fn always_within_bar_bounds(score in -10.0f64..10.0) {
            let pct = Percentage::from_score(score).value();
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }
}
