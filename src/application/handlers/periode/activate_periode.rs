//! ActivatePeriodeHandler - switches the active period.
//!
//! Moving forward promotes every `Aktif` class history row of the previous
//! period one grade into the target and marks grade 12 as graduated.
//! Moving backward only moves the pointer. The repository applies the
//! switch and the promotion atomically.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, PeriodeId, UserId};
use crate::domain::periode::{ActivationDirection, PeriodPromotion, RiwayatKelas};
use crate::ports::PeriodeRepository;

use super::find_periode;

#[derive(Debug, Clone, Copy)]
pub struct ActivatePeriodeCommand {
    pub id: PeriodeId,
}

#[derive(Debug, Clone)]
pub struct ActivationOutcome {
    pub direction: ActivationDirection,
    pub promoted: u64,
    pub message: String,
}

pub struct ActivatePeriodeHandler {
    repo: Arc<dyn PeriodeRepository>,
}

impl ActivatePeriodeHandler {
    pub fn new(repo: Arc<dyn PeriodeRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, cmd: ActivatePeriodeCommand) -> Result<ActivationOutcome, DomainError> {
        // 1. Load target and the current active period
        let target = find_periode(self.repo.as_ref(), cmd.id).await?;
        let active = self.repo.active().await?;
        let direction = ActivationDirection::between(&target, active.as_ref());

        if direction == ActivationDirection::AlreadyActive {
            return Ok(ActivationOutcome {
                direction,
                promoted: 0,
                message: direction.outcome_message(&target, 0),
            });
        }

        // 2. Plan the promotion when moving forward
        let promotion = match (&active, direction.promotes()) {
            (Some(previous), true) => {
                let previous_rows: Vec<RiwayatKelas> = self
                    .repo
                    .riwayat_in(previous.id)
                    .await?
                    .into_iter()
                    .filter(RiwayatKelas::is_aktif)
                    .collect();
                let already_in_target: HashSet<UserId> = self
                    .repo
                    .riwayat_in(target.id)
                    .await?
                    .into_iter()
                    .map(|r| r.siswa_id)
                    .collect();
                PeriodPromotion::plan(&previous_rows, target.id, &already_in_target)
            }
            _ => PeriodPromotion::default(),
        };

        // 3. Switch atomically
        self.repo
            .activate(target.id, active.as_ref().map(|p| p.id), &promotion)
            .await
            .map_err(|e| {
                if e.code.is_infrastructure() {
                    tracing::error!(periode_id = %target.id, error = %e, "periode activation failed");
                    DomainError::new(
                        ErrorCode::InternalError,
                        format!("Gagal mengaktifkan periode: {}", e.message),
                    )
                } else {
                    e
                }
            })?;

        let promoted = promotion.promoted_count();
        tracing::info!(
            periode_id = %target.id,
            direction = ?direction,
            promoted,
            graduated = promotion.graduated.len(),
            "periode activated"
        );

        Ok(ActivationOutcome {
            direction,
            promoted,
            message: direction.outcome_message(&target, promoted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::periode::{KelasLevel, StatusAkhir};

    #[tokio::test]
    async fn already_active_is_a_no_op() {
        let fx = Fixture::new();
        let p = fx.periode("2025/2026", 1, true).await;

        let outcome = ActivatePeriodeHandler::new(fx.store.clone())
            .handle(ActivatePeriodeCommand { id: p.id })
            .await
            .unwrap();

        assert_eq!(outcome.direction, ActivationDirection::AlreadyActive);
        assert_eq!(outcome.message, "Periode ini sudah aktif.");
    }

    #[tokio::test]
    async fn first_activation_is_initial() {
        let fx = Fixture::new();
        let p = fx.periode("2025/2026", 1, false).await;

        let outcome = ActivatePeriodeHandler::new(fx.store.clone())
            .handle(ActivatePeriodeCommand { id: p.id })
            .await
            .unwrap();

        assert_eq!(outcome.direction, ActivationDirection::Initial);
        assert_eq!(fx.store.active().await.unwrap().map(|a| a.id), Some(p.id));
    }

    #[tokio::test]
    async fn forward_promotes_and_graduates() {
        let fx = Fixture::new();
        let current = fx.periode("2024/2025", 1, true).await;
        let next = fx.periode("2025/2026", 2, false).await;
        let s10 = fx.siswa("siswa10", KelasLevel::Sepuluh, None).await;
        let s12 = fx.siswa("siswa12", KelasLevel::DuaBelas, None).await;
        fx.enrol(&s10, &current, KelasLevel::Sepuluh).await;
        fx.enrol(&s12, &current, KelasLevel::DuaBelas).await;

        let outcome = ActivatePeriodeHandler::new(fx.store.clone())
            .handle(ActivatePeriodeCommand { id: next.id })
            .await
            .unwrap();

        assert_eq!(outcome.direction, ActivationDirection::Forward);
        assert_eq!(outcome.promoted, 1);
        let promoted = fx.store.riwayat(s10.id, next.id).await.unwrap().unwrap();
        assert_eq!(promoted.tingkat_kelas, KelasLevel::Sebelas);
        let graduated = fx.store.riwayat(s12.id, current.id).await.unwrap().unwrap();
        assert_eq!(graduated.status_akhir, StatusAkhir::Lulus);
        assert!(fx.store.riwayat(s12.id, next.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn backward_moves_pointer_only() {
        let fx = Fixture::new();
        let earlier = fx.periode("2023/2024", 1, false).await;
        let current = fx.periode("2024/2025", 2, true).await;
        let s10 = fx.siswa("siswa10", KelasLevel::Sepuluh, None).await;
        fx.enrol(&s10, &current, KelasLevel::Sepuluh).await;

        let outcome = ActivatePeriodeHandler::new(fx.store.clone())
            .handle(ActivatePeriodeCommand { id: earlier.id })
            .await
            .unwrap();

        assert_eq!(outcome.direction, ActivationDirection::Backward);
        assert_eq!(outcome.promoted, 0);
        assert!(fx.store.riwayat_in(earlier.id).await.unwrap().is_empty());
        let periodes = PeriodeRepository::list(fx.store.as_ref()).await.unwrap();
        assert_eq!(periodes.iter().filter(|p| p.periode.is_active).count(), 1);
    }
}
