//! Alumni records shown to students as role models.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlumniId, DomainError};
use crate::domain::kriteria::Jalur;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alumni {
    pub id: AlumniId,
    pub name: String,
    /// Free text such as "Kuliah di ITS" or "Bekerja".
    pub status: String,
    /// Graduation year.
    pub batch: i32,
    /// Major name as free text.
    pub major: String,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Alumni {
    /// Matches the search box against name, major and status.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty()
            || contains_ci(&self.name, query)
            || contains_ci(&self.major, query)
            || contains_ci(&self.status, query)
    }

    /// Same major as the student and a status matching the pathway.
    pub fn is_relevant(&self, nama_jurusan: &str, jalur: Jalur) -> bool {
        contains_ci(&self.major, nama_jurusan) && contains_ci(&self.status, jalur.alumni_keyword())
    }
}

/// Admin input for an alumni record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlumniDraft {
    pub name: String,
    pub status: String,
    pub batch: i32,
    pub major: String,
}

impl AlumniDraft {
    pub fn validate(self) -> Result<AlumniDraft, DomainError> {
        let name = self.name.trim().to_string();
        let status = self.status.trim().to_string();
        let major = self.major.trim().to_string();
        if name.is_empty() || status.is_empty() || major.is_empty() {
            return Err(DomainError::validation(
                "name",
                "Nama, status dan jurusan alumni wajib diisi",
            ));
        }
        if !(1900..=9999).contains(&self.batch) {
            return Err(DomainError::validation("batch", "Tahun lulus tidak valid"));
        }
        Ok(AlumniDraft {
            name,
            status,
            batch: self.batch,
            major,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alumni(status: &str, major: &str) -> Alumni {
        Alumni {
            id: AlumniId::new(1),
            name: "Rina".to_string(),
            status: status.to_string(),
            batch: 2023,
            major: major.to_string(),
        }
    }

    #[test]
    fn relevance_needs_major_and_keyword() {
        let a = alumni("Kuliah di UNESA", "Teknik Komputer dan Jaringan");
        assert!(a.is_relevant("teknik komputer", Jalur::Studi));
        assert!(!a.is_relevant("Multimedia", Jalur::Studi));
        assert!(!a.is_relevant("Teknik Komputer", Jalur::Kerja));
    }

    #[test]
    fn employed_alumni_match_work_pathway() {
        let a = alumni("Bekerja di PT Telkom", "Multimedia");
        assert!(a.is_relevant("Multimedia", Jalur::Kerja));
        assert!(!a.is_relevant("Multimedia", Jalur::Wirausaha));
    }

    #[test]
    fn search_covers_name_major_and_status() {
        let a = alumni("Wirausaha", "Akuntansi");
        assert!(a.matches_search("rin"));
        assert!(a.matches_search("akun"));
        assert!(a.matches_search("usaha"));
        assert!(a.matches_search(""));
        assert!(!a.matches_search("budi"));
    }

    #[test]
    fn draft_requires_fields() {
        let draft = AlumniDraft {
            name: "Rina".to_string(),
            status: " ".to_string(),
            batch: 2024,
            major: "RPL".to_string(),
        };
        assert!(draft.validate().is_err());
    }
}
