//! Academic periods and the direction of an activation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, PeriodeId};

/// An academic term. `urutan` is the explicit academic order; ids say
/// nothing about chronology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Periode {
    pub id: PeriodeId,
    pub nama_periode: String,
    pub urutan: i32,
    pub is_active: bool,
}

impl Periode {
    /// Trims and checks a period name.
    pub fn validate_nama(nama: &str) -> Result<String, DomainError> {
        let nama = nama.trim();
        if nama.is_empty() {
            return Err(DomainError::validation("nama_periode", "Nama wajib diisi"));
        }
        Ok(nama.to_string())
    }

    /// Ordering for a new period when the caller gives none.
    pub fn next_urutan(existing: &[Periode]) -> i32 {
        existing.iter().map(|p| p.urutan).max().unwrap_or(0) + 1
    }
}

/// What activating a period does, relative to the currently active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationDirection {
    /// Target is already the active period; nothing changes.
    AlreadyActive,
    /// No period is active yet.
    Initial,
    /// Target comes later; class history is promoted.
    Forward,
    /// Target comes earlier; pointer switch only, for review.
    Backward,
}

impl ActivationDirection {
    /// Compares the target against the active period by `urutan`.
    pub fn between(target: &Periode, active: Option<&Periode>) -> Self {
        match active {
            _ if target.is_active => ActivationDirection::AlreadyActive,
            None => ActivationDirection::Initial,
            Some(active) if active.id == target.id => ActivationDirection::AlreadyActive,
            Some(active) if target.urutan > active.urutan => ActivationDirection::Forward,
            Some(_) => ActivationDirection::Backward,
        }
    }

    pub fn promotes(&self) -> bool {
        matches!(self, ActivationDirection::Forward)
    }

    /// Text of the confirmation dialog shown before activating.
    pub fn confirmation(&self, target: &Periode) -> String {
        match self {
            ActivationDirection::AlreadyActive => {
                format!("Periode {} sudah aktif.", target.nama_periode)
            }
            ActivationDirection::Initial => format!(
                "Aktifkan periode {}? Ini adalah periode aktif pertama.",
                target.nama_periode
            ),
            ActivationDirection::Forward => format!(
                "Aktifkan periode {}? Periode lain akan dinonaktifkan dan siswa aktif akan naik kelas (kelas 12 ditandai Lulus).",
                target.nama_periode
            ),
            ActivationDirection::Backward => format!(
                "Aktifkan kembali periode {} untuk peninjauan? Tidak ada proses kenaikan kelas yang dijalankan.",
                target.nama_periode
            ),
        }
    }

    /// Result message after a successful activation.
    pub fn outcome_message(&self, target: &Periode, promoted: u64) -> String {
        match self {
            ActivationDirection::AlreadyActive => "Periode ini sudah aktif.".to_string(),
            ActivationDirection::Initial => format!(
                "Periode {} diaktifkan (Inisialisasi Awal).",
                target.nama_periode
            ),
            ActivationDirection::Forward => format!(
                "Periode {} diaktifkan. {} siswa naik kelas.",
                target.nama_periode, promoted
            ),
            ActivationDirection::Backward => format!(
                "Periode {} diaktifkan KEMBALI (Mode Mundur/Review). Tidak ada proses kenaikan kelas yang dijalankan.",
                target.nama_periode
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periode(id: i64, urutan: i32, is_active: bool) -> Periode {
        Periode {
            id: PeriodeId::new(id),
            nama_periode: format!("P{}", urutan),
            urutan,
            is_active,
        }
    }

    #[test]
    fn later_ordering_is_forward() {
        let active = periode(3, 3, true);
        let direction = ActivationDirection::between(&periode(5, 5, false), Some(&active));
        assert_eq!(direction, ActivationDirection::Forward);
        assert!(direction.confirmation(&periode(5, 5, false)).contains("naik kelas"));
    }

    #[test]
    fn earlier_ordering_is_backward() {
        let active = periode(3, 3, true);
        let direction = ActivationDirection::between(&periode(2, 2, false), Some(&active));
        assert_eq!(direction, ActivationDirection::Backward);
        assert!(!direction.promotes());
    }

    #[test]
    fn direction_ignores_id_magnitude() {
        // Created later, but academically earlier.
        let active = periode(1, 4, true);
        let target = periode(9, 2, false);
        assert_eq!(
            ActivationDirection::between(&target, Some(&active)),
            ActivationDirection::Backward
        );
    }

    #[test]
    fn no_active_period_is_initial() {
        assert_eq!(
            ActivationDirection::between(&periode(1, 1, false), None),
            ActivationDirection::Initial
        );
    }

    #[test]
    fn active_target_is_a_no_op() {
        let target = periode(2, 2, true);
        let direction = ActivationDirection::between(&target, Some(&target));
        assert_eq!(direction, ActivationDirection::AlreadyActive);
        assert_eq!(direction.outcome_message(&target, 0), "Periode ini sudah aktif.");
    }

    #[test]
    fn forward_message_counts_promotions() {
        let target = periode(4, 4, false);
        assert_eq!(
            ActivationDirection::Forward.outcome_message(&target, 12),
            "Periode P4 diaktifkan. 12 siswa naik kelas."
        );
    }

    #[test]
    fn next_urutan_follows_maximum() {
        assert_eq!(Periode::next_urutan(&[]), 1);
        assert_eq!(Periode::next_urutan(&[periode(1, 7, false), periode(2, 3, true)]), 8);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(Periode::validate_nama("  ").is_err());
        assert_eq!(Periode::validate_nama(" 2025/2026 ").unwrap(), "2025/2026");
    }
}
