//! Major repository port, including per-major static criterion values.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, JurusanId, KriteriaId};
use crate::domain::sekolah::{Jurusan, JurusanDraft, NilaiStaticJurusan};

#[async_trait]
pub trait JurusanRepository: Send + Sync {
    /// All majors ordered by code.
    async fn list(&self) -> Result<Vec<Jurusan>, DomainError>;

    async fn find(&self, id: JurusanId) -> Result<Option<Jurusan>, DomainError>;

    /// # Errors
    ///
    /// - `Conflict` if the code is taken
    async fn create(&self, draft: JurusanDraft) -> Result<Jurusan, DomainError>;

    /// # Errors
    ///
    /// - `NotFound` if the major does not exist
    /// - `Conflict` if the code is taken
    async fn update(&self, id: JurusanId, draft: JurusanDraft) -> Result<Jurusan, DomainError>;

    /// Deleting a major clears it from users and class history. Returns
    /// false when nothing was deleted.
    async fn delete(&self, id: JurusanId) -> Result<bool, DomainError>;

    /// Stored static values of one major.
    async fn static_values(&self, id: JurusanId) -> Result<Vec<NilaiStaticJurusan>, DomainError>;

    /// Upsert static values of one major.
    async fn save_static_values(
        &self,
        id: JurusanId,
        values: &[(KriteriaId, f64)],
    ) -> Result<(), DomainError>;
}
