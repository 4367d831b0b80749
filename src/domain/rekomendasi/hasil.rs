//! Ranking results kept per student and period.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{HasilId, KriteriaId, PeriodeId, Timestamp, UserId};
use crate::domain::kriteria::{natural_sort_by_kode, Jalur, Kriteria};
use crate::domain::moora::{MooraOutcome, SkorJalur};
use crate::domain::periode::KelasLevel;

/// One answer as it was when the result was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JawabanSnapshot {
    pub kriteria_kode: String,
    pub kriteria_nama: String,
    pub pertanyaan_teks: Option<String>,
    pub jawaban_nilai: f64,
}

impl JawabanSnapshot {
    /// Freezes the answered criteria in natural code order.
    pub fn capture(kriteria: &[Kriteria], values: &HashMap<KriteriaId, f64>) -> Vec<Self> {
        let mut answered: Vec<&Kriteria> = kriteria.iter().filter(|k| values.contains_key(&k.id)).collect();
        natural_sort_by_kode(&mut answered, |k| k.kode.as_str());
        answered
            .into_iter()
            .map(|k| JawabanSnapshot {
                kriteria_kode: k.kode.clone(),
                kriteria_nama: k.nama.clone(),
                pertanyaan_teks: k.pertanyaan.clone(),
                jawaban_nilai: values[&k.id],
            })
            .collect()
    }
}

/// A stored recommendation. Unique per (siswa, periode).
#[derive(Debug, Clone, PartialEq)]
pub struct HasilRekomendasi {
    pub id: HasilId,
    pub siswa_id: UserId,
    pub periode_id: Option<PeriodeId>,
    pub tingkat_kelas: Option<KelasLevel>,
    pub skor: SkorJalur,
    pub keputusan: Jalur,
    pub catatan: Option<String>,
    pub riwayat_jawaban: Vec<JawabanSnapshot>,
    pub created_at: Timestamp,
}

impl HasilRekomendasi {
    /// Score of the chosen pathway.
    pub fn skor_tertinggi(&self) -> f64 {
        self.skor.highest()
    }
}

/// Fresh computation to upsert by (siswa, periode). An existing counsellor
/// note survives the upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct HasilDraft {
    pub siswa_id: UserId,
    pub periode_id: Option<PeriodeId>,
    pub tingkat_kelas: Option<KelasLevel>,
    pub skor: SkorJalur,
    pub keputusan: Jalur,
    pub riwayat_jawaban: Vec<JawabanSnapshot>,
}

impl HasilDraft {
    pub fn from_outcome(
        siswa_id: UserId,
        periode_id: Option<PeriodeId>,
        tingkat_kelas: Option<KelasLevel>,
        outcome: MooraOutcome,
        riwayat_jawaban: Vec<JawabanSnapshot>,
    ) -> Self {
        Self {
            siswa_id,
            periode_id,
            tingkat_kelas,
            skor: outcome.skor,
            keputusan: outcome.keputusan,
            riwayat_jawaban,
        }
    }

    pub fn into_hasil(self, id: HasilId, catatan: Option<String>, created_at: Timestamp) -> HasilRekomendasi {
        HasilRekomendasi {
            id,
            siswa_id: self.siswa_id,
            periode_id: self.periode_id,
            tingkat_kelas: self.tingkat_kelas,
            skor: self.skor,
            keputusan: self.keputusan,
            catatan,
            riwayat_jawaban: self.riwayat_jawaban,
            created_at,
        }
    }
}

/// Period label of a result: the period name, or the class when the result
/// has no period.
pub fn periode_label(nama_periode: Option<&str>, tingkat_kelas: Option<KelasLevel>) -> String {
    match (nama_periode, tingkat_kelas) {
        (Some(nama), _) => nama.to_string(),
        (None, Some(kelas)) => format!("Kelas {}", kelas),
        (None, None) => "-".to_string(),
    }
}
