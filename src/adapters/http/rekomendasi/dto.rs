//! Wire shapes for the questionnaire and results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::rekomendasi::ResultView;
use crate::domain::foundation::{HasilId, KriteriaId, Timestamp};
use crate::domain::moora::{SkorJalur, SkorPersen};
use crate::domain::periode::KelasLevel;
use crate::domain::rekomendasi::{FormField, HasilRekomendasi, JawabanSnapshot};

#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    pub data: Vec<FormField>,
}

/// An answer as sent by the form: a number or a numeric string.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(#[serde(deserialize_with = "parse_numeric_text")] f64),
}

fn parse_numeric_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

impl AnswerValue {
    pub fn value(self) -> f64 {
        match self {
            AnswerValue::Number(v) | AnswerValue::Text(v) => v,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveAnswersRequest {
    #[serde(default)]
    pub values: BTreeMap<KriteriaId, AnswerValue>,
}

impl SaveAnswersRequest {
    pub fn into_values(self) -> BTreeMap<KriteriaId, f64> {
        self.values
            .into_iter()
            .map(|(id, v)| (id, v.value()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultParams {
    #[serde(default)]
    pub id: Option<HasilId>,
}

/// A stored recommendation as shown to students and counsellors.
#[derive(Debug, Clone, Serialize)]
pub struct HasilResponse {
    pub id: HasilId,
    /// Pathway label, e.g. "Melanjutkan Studi".
    pub keputusan: String,
    pub skor: SkorJalur,
    pub skor_persen: SkorPersen,
    pub skor_tertinggi: f64,
    pub catatan: Option<String>,
    pub created_at: Timestamp,
    pub tingkat_kelas: Option<KelasLevel>,
    pub riwayat_jawaban: Vec<JawabanSnapshot>,
}

impl From<HasilRekomendasi> for HasilResponse {
    fn from(hasil: HasilRekomendasi) -> Self {
        Self {
            id: hasil.id,
            keputusan: hasil.keputusan.label().to_string(),
            skor_persen: hasil.skor.percentages(),
            skor_tertinggi: hasil.skor_tertinggi(),
            skor: hasil.skor,
            catatan: hasil.catatan,
            created_at: hasil.created_at,
            tingkat_kelas: hasil.tingkat_kelas,
            riwayat_jawaban: hasil.riwayat_jawaban,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlumniBrief {
    pub name: String,
    pub batch: i32,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub hasil: HasilResponse,
    pub alumni: Vec<AlumniBrief>,
    /// Name of the period the result belongs to.
    pub periode: Option<String>,
}

impl From<ResultView> for ResultResponse {
    fn from(view: ResultView) -> Self {
        Self {
            hasil: view.hasil.into(),
            alumni: view
                .alumni
                .into_iter()
                .map(|a| AlumniBrief {
                    name: a.name,
                    batch: a.batch,
                    status: a.status,
                })
                .collect(),
            periode: view.periode.map(|p| p.nama_periode),
        }
    }
}
