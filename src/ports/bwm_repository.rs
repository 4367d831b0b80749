//! BWM repository port.
//!
//! Stores each expert's latest comparison set together with the weights
//! derived from it. A new submission replaces the previous one as a whole.

use async_trait::async_trait;

use crate::domain::bwm::{BobotKriteria, ComparisonSet};
use crate::domain::foundation::{DomainError, UserId};

/// Persistence for comparison sets and derived weights.
#[async_trait]
pub trait BwmRepository: Send + Sync {
    /// Replace the expert's comparisons and weights in one transaction.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure; nothing is changed then
    async fn save_submission(
        &self,
        pakar_id: UserId,
        comparisons: &ComparisonSet,
        weights: &[BobotKriteria],
    ) -> Result<(), DomainError>;

    /// The expert's saved comparisons, empty if they never submitted.
    async fn comparisons_for(&self, pakar_id: UserId) -> Result<ComparisonSet, DomainError>;

    /// Every stored weight of every expert.
    async fn all_weights(&self) -> Result<Vec<BobotKriteria>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bwm_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn BwmRepository>();
    }
}
