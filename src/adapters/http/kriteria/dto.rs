//! Wire shapes for criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::KriteriaId;
use crate::domain::kriteria::{
    Atribut, JalurSet, Kategori, Kriteria, KriteriaDraft, OpsiPilihan, PenanggungJawab,
    SumberNilai, TipeInputKind,
};

fn default_true() -> bool {
    true
}

fn default_scale() -> f64 {
    5.0
}

fn default_atribut() -> Atribut {
    Atribut::Benefit
}

fn default_kategori() -> Kategori {
    Kategori::Kuesioner
}

fn default_sumber() -> SumberNilai {
    SumberNilai::InputSiswa
}

fn default_pj() -> PenanggungJawab {
    PenanggungJawab::Umum
}

fn default_targets() -> JalurSet {
    JalurSet::ALL
}

/// Create/update body. Omitted fields take the questionnaire defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct KriteriaRequest {
    #[serde(default)]
    pub kode: String,
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub pertanyaan: Option<String>,
    pub tipe_input: TipeInputKind,
    #[serde(default)]
    pub opsi_pilihan: Option<Vec<OpsiPilihan>>,
    #[serde(default = "default_atribut")]
    pub atribut: Atribut,
    #[serde(default = "default_kategori")]
    pub kategori: Kategori,
    #[serde(default = "default_sumber")]
    pub sumber_nilai: SumberNilai,
    #[serde(default = "default_true")]
    pub tampil_di_siswa: bool,
    #[serde(default = "default_pj")]
    pub penanggung_jawab: PenanggungJawab,
    #[serde(default = "default_scale")]
    pub skala_maks: f64,
    #[serde(default = "default_targets")]
    pub target_jalur: JalurSet,
    #[serde(default)]
    pub jalur_reverse: JalurSet,
}

impl From<KriteriaRequest> for KriteriaDraft {
    fn from(req: KriteriaRequest) -> Self {
        KriteriaDraft {
            kode: req.kode,
            nama: req.nama,
            pertanyaan: req.pertanyaan,
            tipe_input: req.tipe_input,
            opsi_pilihan: req.opsi_pilihan,
            atribut: req.atribut,
            kategori: req.kategori,
            sumber_nilai: req.sumber_nilai,
            tampil_di_siswa: req.tampil_di_siswa,
            penanggung_jawab: req.penanggung_jawab,
            skala_maks: req.skala_maks,
            target_jalur: req.target_jalur,
            jalur_reverse: req.jalur_reverse,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KriteriaResponse {
    pub id: KriteriaId,
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

impl From<Kriteria> for KriteriaResponse {
    fn from(k: Kriteria) -> Self {
        let opsi = k.tipe_input.opsi();
        let opsi_pilihan = (!opsi.is_empty()).then(|| opsi.to_vec());
        Self {
            id: k.id,
            tipe_input: k.tipe_input.kind(),
            opsi_pilihan,
            kode: k.kode,
            nama: k.nama,
            pertanyaan: k.pertanyaan,
            atribut: k.atribut,
            kategori: k.kategori,
            sumber_nilai: k.sumber_nilai,
            tampil_di_siswa: k.tampil_di_siswa,
            penanggung_jawab: k.penanggung_jawab,
            skala_maks: k.skala_maks,
            target_jalur: k.target_jalur,
            jalur_reverse: k.jalur_reverse,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KriteriaListResponse {
    pub data: Vec<KriteriaResponse>,
}
