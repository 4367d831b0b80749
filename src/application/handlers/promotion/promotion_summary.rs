//! PromotionSummaryHandler - students per grade before promoting.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Role};
use crate::domain::periode::{KelasLevel, PromotionSummary};
use crate::domain::users::UserFilter;
use crate::ports::UserRepository;

pub struct PromotionSummaryHandler {
    users: Arc<dyn UserRepository>,
}

impl PromotionSummaryHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<PromotionSummary, DomainError> {
        let mut counts = [0u64; 3];
        for (slot, kelas) in counts.iter_mut().zip(KelasLevel::GRADES) {
            let filter = UserFilter {
                kelas: Some(kelas),
                ..UserFilter::role(Role::Siswa)
            };
            *slot = self.users.count(&filter).await?;
        }
        Ok(PromotionSummary::new(counts[0], counts[1], counts[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    #[tokio::test]
    async fn counts_each_grade() {
        let fx = Fixture::new();
        fx.siswa("a", KelasLevel::Sepuluh, None).await;
        fx.siswa("b", KelasLevel::Sepuluh, None).await;
        fx.siswa("c", KelasLevel::DuaBelas, None).await;
        fx.pakar("gurubk").await;

        let summary = PromotionSummaryHandler::new(fx.store.clone())
            .handle()
            .await
            .unwrap();

        assert_eq!(summary, PromotionSummary::new(2, 0, 1));
        assert_eq!(summary.total_eligible, 3);
    }
}
