//! Criterion repository port.
//!
//! Criteria are the columns of every MOORA matrix and the keys of every BWM
//! comparison, so deleting one cascades into student values, static major
//! values, stored weights and comparisons.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, KriteriaId};
use crate::domain::kriteria::{Kriteria, KriteriaDefinition};

/// Persistence for criterion definitions.
#[async_trait]
pub trait KriteriaRepository: Send + Sync {
    /// All criteria in natural code order (`C1, C2, C10`).
    async fn list(&self) -> Result<Vec<Kriteria>, DomainError>;

    /// Find a criterion by id.
    async fn find(&self, id: KriteriaId) -> Result<Option<Kriteria>, DomainError>;

    /// Insert a validated definition.
    ///
    /// # Errors
    ///
    /// - `Conflict` ("Kode kriteria sudah digunakan") if the code exists
    /// - `DatabaseError` on persistence failure
    async fn create(&self, definition: KriteriaDefinition) -> Result<Kriteria, DomainError>;

    /// Overwrite every field except the code.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the criterion does not exist
    async fn update(&self, kriteria: &Kriteria) -> Result<(), DomainError>;

    /// Delete a criterion and everything keyed on it. Returns false when
    /// nothing was deleted.
    async fn delete(&self, id: KriteriaId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kriteria_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn KriteriaRepository) {}
    }

    #[test]
    fn kriteria_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn KriteriaRepository>();
    }
}
