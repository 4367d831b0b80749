//! SubmitComparisonsHandler - validates one expert's comparisons, derives
//! weights and stores both.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::bwm::{
    BobotKriteria, BwmMethod, BwmSolver, ComparisonSet, DEFAULT_CONSISTENCY_THRESHOLD,
};
use crate::domain::foundation::{DomainError, ErrorCode, KriteriaId, UserId};
use crate::domain::kriteria::natural_sort_by_kode;
use crate::domain::sekolah::bwm_reference;
use crate::ports::{BwmRepository, KriteriaRepository, SettingsRepository};

/// Solver tuning taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct BwmOptions {
    pub method: BwmMethod,
    pub consistency_threshold: f64,
    pub reject_inconsistent: bool,
}

impl Default for BwmOptions {
    fn default() -> Self {
        Self {
            method: BwmMethod::default(),
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            reject_inconsistent: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitComparisonsCommand {
    pub pakar_id: UserId,
    pub comparisons: ComparisonSet,
}

#[derive(Debug, Clone)]
pub struct SubmissionResult {
    /// Weight per criterion code.
    pub bobot: BTreeMap<String, f64>,
    pub ksi: f64,
    pub consistency_ratio: f64,
    pub konsisten: bool,
}

impl SubmissionResult {
    pub fn message(&self) -> &'static str {
        if self.konsisten {
            "Perbandingan berhasil disimpan. Bobot kriteria telah diperbarui."
        } else {
            "Perbandingan disimpan, namun rasio konsistensi melebihi batas. Pertimbangkan untuk meninjau ulang nilai."
        }
    }
}

pub struct SubmitComparisonsHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    settings: Arc<dyn SettingsRepository>,
    bwm: Arc<dyn BwmRepository>,
    options: BwmOptions,
}

impl SubmitComparisonsHandler {
    pub fn new(
        kriteria: Arc<dyn KriteriaRepository>,
        settings: Arc<dyn SettingsRepository>,
        bwm: Arc<dyn BwmRepository>,
        options: BwmOptions,
    ) -> Self {
        Self {
            kriteria,
            settings,
            bwm,
            options,
        }
    }

    pub async fn handle(&self, cmd: SubmitComparisonsCommand) -> Result<SubmissionResult, DomainError> {
        // 1. The admin must have locked a reference
        let reference = bwm_reference(&self.settings.all().await?).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ReferenceNotSet,
                "Admin belum menetapkan kriteria terbaik dan terburuk",
            )
        })?;

        // 2. Lay the set out against every criterion
        let mut kriteria = self.kriteria.list().await?;
        natural_sort_by_kode(&mut kriteria, |k| k.kode.as_str());
        let ids: Vec<KriteriaId> = kriteria.iter().map(|k| k.id).collect();
        let problem = cmd.comparisons.validate(&reference, &ids)?;

        // 3. Solve
        let solution = BwmSolver::solve(&problem, self.options.method)?;
        let konsisten = solution.is_consistent(self.options.consistency_threshold);
        if !konsisten && self.options.reject_inconsistent {
            return Err(DomainError::validation(
                "comparisons",
                format!(
                    "Rasio konsistensi {:.4} melebihi batas {}. Tinjau ulang nilai perbandingan.",
                    solution.consistency_ratio, self.options.consistency_threshold
                ),
            ));
        }

        // 4. Replace the expert's previous submission
        let weights: Vec<BobotKriteria> = ids
            .iter()
            .zip(&solution.weights)
            .map(|(id, w)| BobotKriteria::new(*id, cmd.pakar_id, *w))
            .collect();
        self.bwm
            .save_submission(cmd.pakar_id, &cmd.comparisons, &weights)
            .await?;

        tracing::info!(
            pakar_id = %cmd.pakar_id,
            ksi = solution.ksi,
            consistency_ratio = solution.consistency_ratio,
            "BWM comparisons submitted"
        );

        Ok(SubmissionResult {
            bobot: kriteria
                .iter()
                .map(|k| k.kode.clone())
                .zip(solution.weights.iter().copied())
                .collect(),
            ksi: solution.ksi,
            consistency_ratio: solution.consistency_ratio,
            konsisten,
        })
    }
}
