//! Wire shapes for BWM.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::adapters::http::kriteria::KriteriaResponse;
use crate::application::handlers::bwm::{
    AggregatedWeights, BwmSettingView, InputContext, SubmissionResult,
};
use crate::domain::bwm::ComparisonSet;
use crate::domain::foundation::KriteriaId;

#[derive(Debug, Clone, Deserialize)]
pub struct BwmSettingRequest {
    #[serde(default)]
    pub best_id: Option<KriteriaId>,
    #[serde(default)]
    pub worst_id: Option<KriteriaId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BwmSettingResponse {
    pub kriterias: Vec<KriteriaResponse>,
    pub current_best: Option<KriteriaId>,
    pub current_worst: Option<KriteriaId>,
}

impl From<BwmSettingView> for BwmSettingResponse {
    fn from(view: BwmSettingView) -> Self {
        Self {
            kriterias: view.kriterias.into_iter().map(Into::into).collect(),
            current_best: view.current_best,
            current_worst: view.current_worst,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedSettingResponse {
    pub msg: String,
    pub best_id: KriteriaId,
    pub worst_id: KriteriaId,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputContextResponse {
    pub global_best: Option<KriteriaResponse>,
    pub global_worst: Option<KriteriaResponse>,
    pub kriteria_list: Vec<KriteriaResponse>,
    pub saved_best_to_others: BTreeMap<KriteriaId, u8>,
    pub saved_others_to_worst: BTreeMap<KriteriaId, u8>,
}

impl From<InputContext> for InputContextResponse {
    fn from(ctx: InputContext) -> Self {
        Self {
            global_best: ctx.global_best.map(Into::into),
            global_worst: ctx.global_worst.map(Into::into),
            kriteria_list: ctx.kriteria_list.into_iter().map(Into::into).collect(),
            saved_best_to_others: ctx.saved.best_to_others,
            saved_others_to_worst: ctx.saved.others_to_worst,
        }
    }
}

/// Comparison maps keyed by criterion id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonRequest {
    #[serde(default)]
    pub best_to_others: BTreeMap<KriteriaId, u8>,
    #[serde(default)]
    pub others_to_worst: BTreeMap<KriteriaId, u8>,
}

impl From<ComparisonRequest> for ComparisonSet {
    fn from(req: ComparisonRequest) -> Self {
        ComparisonSet {
            best_to_others: req.best_to_others,
            others_to_worst: req.others_to_worst,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub msg: String,
    pub bobot: BTreeMap<String, f64>,
    pub ksi: f64,
    pub consistency_ratio: f64,
    pub konsisten: bool,
}

impl From<SubmissionResult> for SubmissionResponse {
    fn from(result: SubmissionResult) -> Self {
        Self {
            msg: result.message().to_string(),
            bobot: result.bobot,
            ksi: result.ksi,
            consistency_ratio: result.consistency_ratio,
            konsisten: result.konsisten,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightsResponse {
    /// Weight per criterion code.
    pub data: BTreeMap<String, f64>,
    pub pakar_count: usize,
}

impl From<AggregatedWeights> for WeightsResponse {
    fn from(weights: AggregatedWeights) -> Self {
        Self {
            data: weights.by_kode(),
            pakar_count: weights.pakar_count,
        }
    }
}
