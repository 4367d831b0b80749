//! Decision engine configuration

use serde::Deserialize;

use crate::domain::bwm::{BwmMethod, DEFAULT_CONSISTENCY_THRESHOLD};
use crate::domain::foundation::DEFAULT_PER_PAGE;

use super::error::ValidationError;

/// How weights are derived and results presented.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionConfig {
    /// `linear` or `geometric_mean`
    #[serde(default = "default_bwm_method")]
    pub bwm_method: String,

    /// Largest consistency ratio still called consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Refuse to store comparison sets above the threshold
    #[serde(default)]
    pub reject_inconsistent: bool,

    /// Alumni shown next to a recommendation
    #[serde(default = "default_alumni_limit")]
    pub alumni_limit: u32,

    /// Rows per page on admin lists
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl DecisionConfig {
    /// Parsed BWM method. Call [`DecisionConfig::validate`] first.
    pub fn method(&self) -> BwmMethod {
        self.bwm_method.parse().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bwm_method.parse::<BwmMethod>().is_err() {
            return Err(ValidationError::UnknownBwmMethod(self.bwm_method.clone()));
        }
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if self.alumni_limit == 0 {
            return Err(ValidationError::MustBePositive("alumni_limit"));
        }
        if self.page_size == 0 {
            return Err(ValidationError::MustBePositive("page_size"));
        }
        Ok(())
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            bwm_method: default_bwm_method(),
            consistency_threshold: default_consistency_threshold(),
            reject_inconsistent: false,
            alumni_limit: default_alumni_limit(),
            page_size: default_page_size(),
        }
    }
}

fn default_bwm_method() -> String {
    "linear".to_string()
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

fn default_alumni_limit() -> u32 {
    5
}

fn default_page_size() -> u32 {
    DEFAULT_PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DecisionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.method(), BwmMethod::Linear);
        assert_eq!(config.alumni_limit, 5);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn geometric_mean_is_selectable() {
        let config = DecisionConfig {
            bwm_method: "geometric_mean".to_string(),
            ..Default::default()
        };
        assert_eq!(config.method(), BwmMethod::GeometricMean);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let config = DecisionConfig {
            bwm_method: "ahp".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownBwmMethod("ahp".to_string()))
        );
    }

    #[test]
    fn threshold_must_be_a_ratio() {
        for threshold in [0.0, 1.5, f64::NAN] {
            let config = DecisionConfig {
                consistency_threshold: threshold,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }
}
