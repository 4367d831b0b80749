//! Class levels and per-period class history.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{JurusanId, PeriodeId, StateMachine, UserId, ValidationError};

/// Grade a student is in, or `Alumni` once graduated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KelasLevel {
    #[serde(rename = "10")]
    Sepuluh,
    #[serde(rename = "11")]
    Sebelas,
    #[serde(rename = "12")]
    DuaBelas,
    #[serde(rename = "alumni")]
    Alumni,
}

impl KelasLevel {
    /// Levels that are still in school.
    pub const GRADES: [KelasLevel; 3] = [KelasLevel::Sepuluh, KelasLevel::Sebelas, KelasLevel::DuaBelas];

    pub fn as_str(&self) -> &'static str {
        match self {
            KelasLevel::Sepuluh => "10",
            KelasLevel::Sebelas => "11",
            KelasLevel::DuaBelas => "12",
            KelasLevel::Alumni => "alumni",
        }
    }

    /// Level reached after one promotion.
    pub fn next(&self) -> Option<KelasLevel> {
        self.valid_transitions().first().copied()
    }

    pub fn is_final_grade(&self) -> bool {
        *self == KelasLevel::DuaBelas
    }
}

impl StateMachine for KelasLevel {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (KelasLevel::Sepuluh, KelasLevel::Sebelas)
                | (KelasLevel::Sebelas, KelasLevel::DuaBelas)
                | (KelasLevel::DuaBelas, KelasLevel::Alumni)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            KelasLevel::Sepuluh => vec![KelasLevel::Sebelas],
            KelasLevel::Sebelas => vec![KelasLevel::DuaBelas],
            KelasLevel::DuaBelas => vec![KelasLevel::Alumni],
            KelasLevel::Alumni => vec![],
        }
    }
}

impl fmt::Display for KelasLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KelasLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "10" => Ok(KelasLevel::Sepuluh),
            "11" => Ok(KelasLevel::Sebelas),
            "12" => Ok(KelasLevel::DuaBelas),
            "alumni" => Ok(KelasLevel::Alumni),
            other => Err(ValidationError::invalid_format(
                "kelas",
                format!("unknown class level '{}'", other),
            )),
        }
    }
}

/// Outcome of a student's year in a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusAkhir {
    Aktif,
    Lulus,
}

impl StatusAkhir {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAkhir::Aktif => "Aktif",
            StatusAkhir::Lulus => "Lulus",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Aktif" => Some(StatusAkhir::Aktif),
            "Lulus" => Some(StatusAkhir::Lulus),
            _ => None,
        }
    }
}

/// A student's class in one period. Unique per (siswa, periode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiwayatKelas {
    pub siswa_id: UserId,
    pub periode_id: PeriodeId,
    pub tingkat_kelas: KelasLevel,
    pub jurusan_id: Option<JurusanId>,
    pub status_akhir: StatusAkhir,
}

impl RiwayatKelas {
    pub fn aktif(
        siswa_id: UserId,
        periode_id: PeriodeId,
        tingkat_kelas: KelasLevel,
        jurusan_id: Option<JurusanId>,
    ) -> Self {
        Self {
            siswa_id,
            periode_id,
            tingkat_kelas,
            jurusan_id,
            status_akhir: StatusAkhir::Aktif,
        }
    }

    pub fn is_aktif(&self) -> bool {
        self.status_akhir == StatusAkhir::Aktif
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_advance_one_step() {
        assert_eq!(KelasLevel::Sepuluh.next(), Some(KelasLevel::Sebelas));
        assert_eq!(KelasLevel::DuaBelas.next(), Some(KelasLevel::Alumni));
        assert_eq!(KelasLevel::Alumni.next(), None);
    }

    #[test]
    fn alumni_is_terminal() {
        assert!(KelasLevel::Alumni.is_terminal());
        assert!(KelasLevel::Sepuluh.transition_to(KelasLevel::DuaBelas).is_err());
    }

    #[test]
    fn serialises_as_stored_text() {
        assert_eq!(serde_json::to_string(&KelasLevel::Sebelas).unwrap(), "\"11\"");
        assert_eq!("alumni".parse::<KelasLevel>().unwrap(), KelasLevel::Alumni);
        assert!("13".parse::<KelasLevel>().is_err());
    }
}
