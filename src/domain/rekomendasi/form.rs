//! Questionnaire form shown to a student.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::KriteriaId;
use crate::domain::kriteria::{InputWidget, Kategori, Kriteria, OpsiPilihan, TipeInputKind};

/// One question on the form, with the student's previous answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: KriteriaId,
    pub kode: String,
    pub nama: String,
    pub pertanyaan: Option<String>,
    pub tipe_input: TipeInputKind,
    pub kategori: Kategori,
    pub input: InputWidget,
    pub options: Vec<OpsiPilihan>,
    pub value: Option<f64>,
}

fn kategori_rank(kategori: Kategori) -> u8 {
    match kategori {
        Kategori::Akademik => 0,
        Kategori::Kuesioner => 1,
    }
}

/// Student-answered criteria marked visible, academic ones first, then by
/// id.
pub fn form_fields(kriteria: &[Kriteria], answers: &HashMap<KriteriaId, f64>) -> Vec<FormField> {
    let mut visible: Vec<&Kriteria> = kriteria
        .iter()
        .filter(|k| k.tampil_di_siswa && !k.is_static())
        .collect();
    visible.sort_by_key(|k| (kategori_rank(k.kategori), k.id));

    visible
        .into_iter()
        .map(|k| FormField {
            id: k.id,
            kode: k.kode.clone(),
            nama: k.nama.clone(),
            pertanyaan: k.pertanyaan.clone(),
            tipe_input: k.tipe_input.kind(),
            kategori: k.kategori,
            input: k.tipe_input.widget(k.skala_maks),
            options: k.tipe_input.opsi().to_vec(),
            value: answers.get(&k.id).copied(),
        })
        .collect()
}
