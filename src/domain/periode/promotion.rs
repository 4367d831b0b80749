//! Grade promotion, both per period and school-wide.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{PeriodeId, UserId};

use super::{KelasLevel, RiwayatKelas, StatusAkhir};

/// Status recorded for a freshly graduated alumnus.
pub const GRADUATE_STATUS: &str = "Mencari Kerja";

/// Major recorded for a graduate without a jurusan.
pub const GRADUATE_DEFAULT_MAJOR: &str = "Umum";

/// Changes a forward activation makes to class history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodPromotion {
    /// New `Aktif` rows in the target period.
    pub promoted: Vec<RiwayatKelas>,
    /// Students whose previous-period row becomes `Lulus`.
    pub graduated: Vec<UserId>,
}

impl PeriodPromotion {
    /// Plans the move from `previous` rows into `target`.
    ///
    /// Grade 10 and 11 rows get a row one grade higher in the target period
    /// unless the student already has one there. Grade 12 rows are marked
    /// graduated.
    pub fn plan(previous: &[RiwayatKelas], target: PeriodeId, already_in_target: &HashSet<UserId>) -> Self {
        let mut plan = PeriodPromotion::default();
        for row in previous {
            if row.tingkat_kelas.is_final_grade() {
                plan.graduated.push(row.siswa_id);
                continue;
            }
            let Some(next) = row.tingkat_kelas.next().filter(|k| KelasLevel::GRADES.contains(k)) else {
                continue;
            };
            if already_in_target.contains(&row.siswa_id) {
                continue;
            }
            plan.promoted.push(RiwayatKelas {
                siswa_id: row.siswa_id,
                periode_id: target,
                tingkat_kelas: next,
                jurusan_id: row.jurusan_id,
                status_akhir: StatusAkhir::Aktif,
            });
        }
        plan
    }

    pub fn promoted_count(&self) -> u64 {
        self.promoted.len() as u64
    }
}

/// Students per grade, before a school-wide promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromotionSummary {
    pub kelas_10: u64,
    pub kelas_11: u64,
    pub kelas_12: u64,
    pub total_eligible: u64,
}

impl PromotionSummary {
    pub fn new(kelas_10: u64, kelas_11: u64, kelas_12: u64) -> Self {
        Self {
            kelas_10,
            kelas_11,
            kelas_12,
            total_eligible: kelas_10 + kelas_11 + kelas_12,
        }
    }
}

/// What a school-wide promotion changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromotionReport {
    pub lulus: u64,
    pub naik_ke_12: u64,
    pub naik_ke_11: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::JurusanId;

    fn row(siswa: i64, kelas: KelasLevel) -> RiwayatKelas {
        RiwayatKelas::aktif(UserId::new(siswa), PeriodeId::new(1), kelas, Some(JurusanId::new(2)))
    }

    #[test]
    fn promotes_lower_grades_and_graduates_final_grade() {
        let previous = vec![
            row(1, KelasLevel::Sepuluh),
            row(2, KelasLevel::Sebelas),
            row(3, KelasLevel::DuaBelas),
        ];
        let plan = PeriodPromotion::plan(&previous, PeriodeId::new(2), &HashSet::new());
        assert_eq!(plan.promoted_count(), 2);
        assert_eq!(plan.promoted[0].tingkat_kelas, KelasLevel::Sebelas);
        assert_eq!(plan.promoted[1].tingkat_kelas, KelasLevel::DuaBelas);
        assert_eq!(plan.promoted[0].periode_id, PeriodeId::new(2));
        assert_eq!(plan.promoted[0].jurusan_id, Some(JurusanId::new(2)));
        assert_eq!(plan.graduated, vec![UserId::new(3)]);
    }

    #[test]
    fn skips_students_already_in_target() {
        let previous = vec![row(1, KelasLevel::Sepuluh), row(2, KelasLevel::Sepuluh)];
        let existing = HashSet::from([UserId::new(1)]);
        let plan = PeriodPromotion::plan(&previous, PeriodeId::new(2), &existing);
        assert_eq!(plan.promoted.len(), 1);
        assert_eq!(plan.promoted[0].siswa_id, UserId::new(2));
    }

    #[test]
    fn summary_totals_grades() {
        assert_eq!(PromotionSummary::new(3, 4, 5).total_eligible, 12);
    }
}
