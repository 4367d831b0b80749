//! Request bodies and response views used by [`ApiClient`](super::ApiClient).
//!
//! Views only name the fields the screens read; anything else the server
//! sends is ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::bwm::{BwmReference, ComparisonSet};
use crate::domain::foundation::{DomainError, HasilId, KriteriaId, PageMeta};
use crate::domain::kriteria::{
    Atribut, JalurSet, Kategori, KriteriaDefinition, OpsiPilihan, PenanggungJawab, SumberNilai,
    TipeInputKind,
};
use crate::domain::moora::SkorJalur;
use crate::domain::periode::{ActivationDirection, KelasLevel, Periode};
use crate::domain::rekomendasi::{FormField, JawabanSnapshot};
use crate::domain::users::User;

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct LoginBody<'a> {
    pub login_id: &'a str,
    pub password: &'a str,
}

/// A criterion that already passed [`KriteriaDraft::validate`](crate::domain::kriteria::KriteriaDraft::validate).
#[derive(Debug, Clone, Serialize)]
pub struct KriteriaPayload {
    pub kode: String,
    pub nama: String,
    pub pertanyaan: Option<String>,
    pub tipe_input: TipeInputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsi_pilihan: Option<Vec<OpsiPilihan>>,
    pub atribut: Atribut,
    pub kategori: Kategori,
    pub sumber_nilai: SumberNilai,
    pub tampil_di_siswa: bool,
    pub penanggung_jawab: PenanggungJawab,
    pub skala_maks: f64,
    pub target_jalur: JalurSet,
    pub jalur_reverse: JalurSet,
}

impl From<KriteriaDefinition> for KriteriaPayload {
    fn from(def: KriteriaDefinition) -> Self {
        let opsi = def.tipe_input.opsi();
        let opsi_pilihan = (!opsi.is_empty()).then(|| opsi.to_vec());
        Self {
            tipe_input: def.tipe_input.kind(),
            opsi_pilihan,
            kode: def.kode,
            nama: def.nama,
            pertanyaan: def.pertanyaan,
            atribut: def.atribut,
            kategori: def.kategori,
            sumber_nilai: def.sumber_nilai,
            tampil_di_siswa: def.tampil_di_siswa,
            penanggung_jawab: def.penanggung_jawab,
            skala_maks: def.skala_maks,
            target_jalur: def.target_jalur,
            jalur_reverse: def.jalur_reverse,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingBody {
    pub best_id: KriteriaId,
    pub worst_id: KriteriaId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonBody<'a> {
    pub best_to_others: &'a BTreeMap<KriteriaId, u8>,
    pub others_to_worst: &'a BTreeMap<KriteriaId, u8>,
}

impl<'a> From<&'a ComparisonSet> for ComparisonBody<'a> {
    fn from(set: &'a ComparisonSet) -> Self {
        Self {
            best_to_others: &set.best_to_others,
            others_to_worst: &set.others_to_worst,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswersBody<'a> {
    pub values: &'a BTreeMap<KriteriaId, f64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Error body of every failed request.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageView {
    pub msg: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataView<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListView<T> {
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagedView<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginView {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KriteriaView {
    pub id: KriteriaId,
    pub kode: String,
    pub nama: String,
    #[serde(default)]
    pub pertanyaan: Option<String>,
    pub tipe_input: TipeInputKind,
    #[serde(default)]
    pub opsi_pilihan: Option<Vec<OpsiPilihan>>,
    pub atribut: Atribut,
    pub kategori: Kategori,
    pub sumber_nilai: SumberNilai,
    pub tampil_di_siswa: bool,
    pub penanggung_jawab: PenanggungJawab,
    pub skala_maks: f64,
    pub target_jalur: JalurSet,
    pub jalur_reverse: JalurSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BwmSettingView {
    pub kriterias: Vec<KriteriaView>,
    pub current_best: Option<KriteriaId>,
    pub current_worst: Option<KriteriaId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedSettingView {
    pub msg: String,
    pub best_id: KriteriaId,
    pub worst_id: KriteriaId,
}

/// What an expert needs to fill in the comparison form.
#[derive(Debug, Clone, Deserialize)]
pub struct InputContextView {
    pub global_best: Option<KriteriaView>,
    pub global_worst: Option<KriteriaView>,
    pub kriteria_list: Vec<KriteriaView>,
    #[serde(default)]
    pub saved_best_to_others: BTreeMap<KriteriaId, u8>,
    #[serde(default)]
    pub saved_others_to_worst: BTreeMap<KriteriaId, u8>,
}

impl InputContextView {
    /// The locked reference, or `None` while the admin has not set it.
    pub fn reference(&self) -> Option<BwmReference> {
        match (&self.global_best, &self.global_worst) {
            (Some(best), Some(worst)) => BwmReference::new(best.id, worst.id).ok(),
            _ => None,
        }
    }

    pub fn criteria_ids(&self) -> Vec<KriteriaId> {
        self.kriteria_list.iter().map(|k| k.id).collect()
    }

    /// Previously saved answers, as a starting point for the form.
    pub fn saved(&self) -> ComparisonSet {
        ComparisonSet {
            best_to_others: self.saved_best_to_others.clone(),
            others_to_worst: self.saved_others_to_worst.clone(),
        }
    }

    /// Checks a filled-in set against the locked reference and every
    /// criterion in the context.
    pub fn check(&self, set: &ComparisonSet) -> Result<(), DomainError> {
        let reference = self.reference().ok_or_else(|| {
            DomainError::validation("reference", "Admin belum menetapkan kriteria acuan")
        })?;
        set.validate(&reference, &self.criteria_ids()).map(|_| ())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionView {
    pub msg: String,
    pub bobot: BTreeMap<String, f64>,
    pub ksi: f64,
    pub consistency_ratio: f64,
    pub konsisten: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsView {
    pub data: BTreeMap<String, f64>,
    pub pakar_count: usize,
}

pub type FormView = ListView<FormField>;

#[derive(Debug, Clone, Deserialize)]
pub struct HasilView {
    pub id: HasilId,
    pub keputusan: String,
    pub skor: SkorJalur,
    pub skor_tertinggi: f64,
    #[serde(default)]
    pub catatan: Option<String>,
    #[serde(default)]
    pub tingkat_kelas: Option<KelasLevel>,
    #[serde(default)]
    pub riwayat_jawaban: Vec<JawabanSnapshot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlumniBriefView {
    pub name: String,
    pub batch: i32,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultView {
    pub hasil: HasilView,
    #[serde(default)]
    pub alumni: Vec<AlumniBriefView>,
    #[serde(default)]
    pub periode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodeRow {
    #[serde(flatten)]
    pub periode: Periode,
    pub jumlah_siswa: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodeListView {
    pub periodes: Vec<PeriodeRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivationPreviewView {
    pub target: Periode,
    pub active: Option<Periode>,
    pub direction: ActivationDirection,
    pub promotes: bool,
    pub confirmation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivationView {
    pub msg: String,
    pub direction: ActivationDirection,
    pub promoted: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusView {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kriteria_json(id: i64, kode: &str) -> serde_json::Value {
        json!({
            "id": id,
            "kode": kode,
            "nama": format!("Kriteria {}", kode),
            "pertanyaan": null,
            "tipe_input": "likert",
            "atribut": "benefit",
            "kategori": "kuesioner",
            "sumber_nilai": "input_siswa",
            "tampil_di_siswa": true,
            "penanggung_jawab": "gurubk",
            "skala_maks": 5.0,
            "target_jalur": "all",
            "jalur_reverse": ""
        })
    }

    fn context(best: Option<i64>, worst: Option<i64>) -> InputContextView {
        let list: Vec<_> = (1..=3).map(|i| kriteria_json(i, &format!("C{}", i))).collect();
        let pick = |id: Option<i64>| id.map(|i| kriteria_json(i, &format!("C{}", i)));
        serde_json::from_value(json!({
            "global_best": pick(best),
            "global_worst": pick(worst),
            "kriteria_list": list,
            "saved_best_to_others": {"2": 3},
            "saved_others_to_worst": {}
        }))
        .unwrap()
    }

    #[test]
    fn input_context_reads_string_keyed_maps() {
        let ctx = context(Some(1), Some(3));
        assert_eq!(ctx.saved().best_to_others.get(&KriteriaId::new(2)), Some(&3));
        assert_eq!(ctx.criteria_ids().len(), 3);
    }

    #[test]
    fn check_requires_a_reference() {
        let ctx = context(None, None);
        let err = ctx.check(&ComparisonSet::default()).unwrap_err();
        assert_eq!(err.message, "Admin belum menetapkan kriteria acuan");
    }

    #[test]
    fn check_requires_every_comparison() {
        let ctx = context(Some(1), Some(3));
        assert!(ctx.check(&ctx.saved()).is_err());

        let k = KriteriaId::new;
        let complete = ComparisonSet {
            best_to_others: [(k(2), 3), (k(3), 8)].into_iter().collect(),
            others_to_worst: [(k(1), 8), (k(2), 4)].into_iter().collect(),
        };
        assert!(ctx.check(&complete).is_ok());
    }

    #[test]
    fn comparison_body_uses_string_keys() {
        let set = ComparisonSet {
            best_to_others: [(KriteriaId::new(2), 4)].into_iter().collect(),
            others_to_worst: BTreeMap::new(),
        };
        let body = serde_json::to_value(ComparisonBody::from(&set)).unwrap();
        assert_eq!(body["best_to_others"]["2"], 4);
    }

    #[test]
    fn created_view_keeps_only_the_record() {
        let body = json!({
            "msg": "Kriteria berhasil ditambahkan",
            "data": kriteria_json(9, "C9"),
        });
        let view: DataView<KriteriaView> = serde_json::from_value(body).unwrap();
        assert_eq!(view.data.kode, "C9");

        let bare: DataView<KriteriaView> =
            serde_json::from_value(json!({ "data": kriteria_json(9, "C9") })).unwrap();
        assert_eq!(bare.data, view.data);
    }
}
