//! ListPeriodeHandler - every period, latest first, with class counts.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{PeriodeRepository, PeriodeSummary};

pub struct ListPeriodeHandler {
    repo: Arc<dyn PeriodeRepository>,
}

impl ListPeriodeHandler {
    pub fn new(repo: Arc<dyn PeriodeRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self) -> Result<Vec<PeriodeSummary>, DomainError> {
        let mut periodes = self.repo.list().await?;
        periodes.sort_by(|a, b| b.periode.urutan.cmp(&a.periode.urutan));
        Ok(periodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    #[tokio::test]
    async fn orders_by_urutan_descending() {
        let fx = Fixture::new();
        fx.periode("2023/2024", 1, false).await;
        fx.periode("2025/2026", 3, true).await;
        fx.periode("2024/2025", 2, false).await;

        let list = ListPeriodeHandler::new(fx.store.clone()).handle().await.unwrap();

        let urutan: Vec<i32> = list.iter().map(|p| p.periode.urutan).collect();
        assert_eq!(urutan, vec![3, 2, 1]);
    }
}
