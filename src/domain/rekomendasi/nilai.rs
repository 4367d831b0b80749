//! Student answers and static major values.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::{DomainError, KriteriaId, UserId};
use crate::domain::kriteria::Kriteria;

/// Value used for a static criterion the major has no stored value for.
pub const DEFAULT_STATIC_VALUE: f64 = 3.0;

/// One answer of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NilaiSiswa {
    pub siswa_id: UserId,
    pub kriteria_id: KriteriaId,
    pub nilai_input: f64,
}

/// Checks a questionnaire submission against the criteria it answers.
///
/// Every key must be a known, student-answered criterion and every value
/// must satisfy that criterion's input type.
pub fn validate_answers(
    siswa_id: UserId,
    kriteria: &[Kriteria],
    values: &BTreeMap<KriteriaId, f64>,
) -> Result<Vec<NilaiSiswa>, DomainError> {
    if values.is_empty() {
        return Err(DomainError::validation("values", "Tidak ada data yang dikirim"));
    }
    let by_id: HashMap<KriteriaId, &Kriteria> = kriteria.iter().map(|k| (k.id, k)).collect();

    values
        .iter()
        .map(|(id, value)| {
            let k = by_id.get(id).ok_or_else(|| {
                DomainError::validation("values", format!("Kriteria {} tidak ditemukan", id))
            })?;
            if k.is_static() {
                return Err(DomainError::validation(
                    k.kode.clone(),
                    format!("Kriteria {} diisi dari data jurusan", k.kode),
                ));
            }
            k.tipe_input.validate_answer(&k.kode, *value, k.skala_maks)?;
            Ok(NilaiSiswa {
                siswa_id,
                kriteria_id: *id,
                nilai_input: *value,
            })
        })
        .collect()
}

/// Static-criterion values a student is missing, taken from their major.
///
/// Existing answers are never overwritten. Criteria the major has no value
/// for get [`DEFAULT_STATIC_VALUE`].
pub fn missing_static_values(
    kriteria: &[Kriteria],
    existing: &HashMap<KriteriaId, f64>,
    jurusan_values: &HashMap<KriteriaId, f64>,
) -> Vec<(KriteriaId, f64)> {
    kriteria
        .iter()
        .filter(|k| k.is_static() && !existing.contains_key(&k.id))
        .map(|k| {
            let value = jurusan_values
                .get(&k.id)
                .copied()
                .unwrap_or(DEFAULT_STATIC_VALUE);
            (k.id, value)
        })
        .collect()
}
