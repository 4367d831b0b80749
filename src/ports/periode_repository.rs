//! Academic period and class history port.
//!
//! # Invariants
//!
//! - At most one period is active at any time
//! - `nama_periode` and `urutan` are unique
//! - Class history is unique per (siswa, periode)

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{DomainError, PeriodeId, UserId};
use crate::domain::periode::{PeriodPromotion, Periode, RiwayatKelas};

/// A period with the number of students that have class history in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodeSummary {
    #[serde(flatten)]
    pub periode: Periode,
    pub jumlah_siswa: u64,
}

/// Persistence for periods and per-period class history.
#[async_trait]
pub trait PeriodeRepository: Send + Sync {
    /// All periods, latest `urutan` first.
    async fn list(&self) -> Result<Vec<PeriodeSummary>, DomainError>;

    async fn find(&self, id: PeriodeId) -> Result<Option<Periode>, DomainError>;

    /// The active period, if any.
    async fn active(&self) -> Result<Option<Periode>, DomainError>;

    /// Insert an inactive period.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the name or ordering is taken
    async fn create(&self, nama_periode: &str, urutan: i32) -> Result<Periode, DomainError>;

    /// Rename or reorder.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the period does not exist
    /// - `Conflict` if the name or ordering is taken
    async fn update(&self, periode: &Periode) -> Result<(), DomainError>;

    /// Delete a period and its class history. Returns false when nothing
    /// was deleted.
    async fn delete(&self, id: PeriodeId) -> Result<bool, DomainError>;

    /// Make `target` the only active period and apply `promotion` in the
    /// same transaction: insert the promoted rows (skipping students that
    /// already have a row in `target`) and mark the graduated students'
    /// rows in `previous` as `Lulus`.
    async fn activate(
        &self,
        target: PeriodeId,
        previous: Option<PeriodeId>,
        promotion: &PeriodPromotion,
    ) -> Result<(), DomainError>;

    /// Class history rows of one period.
    async fn riwayat_in(&self, periode_id: PeriodeId) -> Result<Vec<RiwayatKelas>, DomainError>;

    /// One student's row in one period.
    async fn riwayat(
        &self,
        siswa_id: UserId,
        periode_id: PeriodeId,
    ) -> Result<Option<RiwayatKelas>, DomainError>;

    /// Insert or replace a class history row.
    async fn upsert_riwayat(&self, riwayat: &RiwayatKelas) -> Result<(), DomainError>;
}
