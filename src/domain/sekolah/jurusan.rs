//! Majors and the per-major values of static criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, JurusanId, KriteriaId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jurusan {
    pub id: JurusanId,
    pub kode_jurusan: String,
    pub nama_jurusan: String,
}

/// Admin input for a major.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JurusanDraft {
    pub kode_jurusan: String,
    pub nama_jurusan: String,
}

impl JurusanDraft {
    pub fn validate(self) -> Result<JurusanDraft, DomainError> {
        let kode_jurusan = self.kode_jurusan.trim().to_uppercase();
        let nama_jurusan = self.nama_jurusan.trim().to_string();
        if kode_jurusan.is_empty() || nama_jurusan.is_empty() {
            return Err(DomainError::validation(
                "kode_jurusan",
                "Kode dan nama jurusan wajib diisi",
            ));
        }
        Ok(JurusanDraft {
            kode_jurusan,
            nama_jurusan,
        })
    }
}

/// Stored value of a static criterion for one major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NilaiStaticJurusan {
    pub jurusan_id: JurusanId,
    pub kriteria_id: KriteriaId,
    pub nilai: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_kode() {
        let draft = JurusanDraft {
            kode_jurusan: " tkj ".to_string(),
            nama_jurusan: "Teknik Komputer dan Jaringan".to_string(),
        };
        assert_eq!(draft.validate().unwrap().kode_jurusan, "TKJ");
    }

    #[test]
    fn requires_both_fields() {
        let draft = JurusanDraft {
            kode_jurusan: "RPL".to_string(),
            nama_jurusan: String::new(),
        };
        assert!(draft.validate().is_err());
    }
}
