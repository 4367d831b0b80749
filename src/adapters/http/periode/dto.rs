//! Wire shapes for periods and promotion.

use serde::{Deserialize, Serialize};

use crate::application::handlers::periode::{ActivationOutcome, ActivationPreview};
use crate::domain::periode::{ActivationDirection, Periode, PromotionReport};
use crate::ports::PeriodeSummary;

#[derive(Debug, Clone, Serialize)]
pub struct PeriodeListResponse {
    pub periodes: Vec<PeriodeSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodeRequest {
    #[serde(default)]
    pub nama_periode: String,
    #[serde(default)]
    pub urutan: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivationPreviewResponse {
    pub target: Periode,
    pub active: Option<Periode>,
    pub direction: ActivationDirection,
    pub promotes: bool,
    pub confirmation: String,
}

impl From<ActivationPreview> for ActivationPreviewResponse {
    fn from(preview: ActivationPreview) -> Self {
        Self {
            promotes: preview.direction.promotes(),
            target: preview.target,
            active: preview.active,
            direction: preview.direction,
            confirmation: preview.confirmation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivationResponse {
    pub msg: String,
    pub direction: ActivationDirection,
    pub promoted: u64,
}

impl From<ActivationOutcome> for ActivationResponse {
    fn from(outcome: ActivationOutcome) -> Self {
        Self {
            msg: outcome.message,
            direction: outcome.direction,
            promoted: outcome.promoted,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromotionRequest {
    #[serde(default)]
    pub batch: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromotionResponse {
    pub msg: String,
    pub data: PromotionReport,
}
