//! Recommendation result repository port.
//!
//! Results are snapshots keyed by (siswa, periode). Recomputing overwrites
//! the scores, decision and answer snapshot but keeps the counsellor note.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HasilId, PeriodeId, UserId};
use crate::domain::rekomendasi::{HasilDraft, HasilRekomendasi};

#[async_trait]
pub trait HasilRepository: Send + Sync {
    /// Insert or replace the result for the draft's (siswa, periode).
    async fn upsert(&self, draft: HasilDraft) -> Result<HasilRekomendasi, DomainError>;

    async fn find(&self, id: HasilId) -> Result<Option<HasilRekomendasi>, DomainError>;

    /// Most recently computed result of a student.
    async fn latest_for_siswa(&self, siswa_id: UserId) -> Result<Option<HasilRekomendasi>, DomainError>;

    /// A student's results ordered by period `urutan`, results without a
    /// period first.
    async fn history(&self, siswa_id: UserId) -> Result<Vec<HasilRekomendasi>, DomainError>;

    /// One result per student: the one in `periode_id`, or each student's
    /// latest when `periode_id` is `None`.
    async fn current(&self, periode_id: Option<PeriodeId>) -> Result<Vec<HasilRekomendasi>, DomainError>;

    /// Most recent results across all students.
    async fn recent(&self, limit: u32) -> Result<Vec<HasilRekomendasi>, DomainError>;

    /// Store a counsellor note. Returns false when the result is missing.
    async fn set_catatan(&self, id: HasilId, catatan: Option<String>) -> Result<bool, DomainError>;
}
