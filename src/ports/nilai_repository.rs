//! Student answer repository port.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, KriteriaId, UserId};
use crate::domain::rekomendasi::NilaiSiswa;

#[async_trait]
pub trait NilaiSiswaRepository: Send + Sync {
    /// Every stored value of one student, keyed by criterion.
    async fn values_for(&self, siswa_id: UserId) -> Result<HashMap<KriteriaId, f64>, DomainError>;

    /// Insert or replace each (siswa, kriteria) value.
    async fn upsert(&self, values: &[NilaiSiswa]) -> Result<(), DomainError>;
}
