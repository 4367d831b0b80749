//! ListKriteriaHandler - all criteria in natural code order.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::kriteria::{natural_sort_by_kode, Kriteria};
use crate::ports::KriteriaRepository;

pub struct ListKriteriaHandler {
    repository: Arc<dyn KriteriaRepository>,
}

impl ListKriteriaHandler {
    pub fn new(repository: Arc<dyn KriteriaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Kriteria>, DomainError> {
        let mut kriteria = self.repository.list().await?;
        natural_sort_by_kode(&mut kriteria, |k| k.kode.as_str());
        Ok(kriteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::kriteria::{Atribut, TipeInputKind};

    #[tokio::test]
    async fn lists_in_natural_order() {
        let fx = Fixture::new();
        for kode in ["C10", "C2", "C1"] {
            fx.kriteria(kode, TipeInputKind::Number, Atribut::Benefit).await;
        }

        let kriteria = ListKriteriaHandler::new(fx.store.clone()).handle().await.unwrap();

        let kodes: Vec<&str> = kriteria.iter().map(|k| k.kode.as_str()).collect();
        assert_eq!(kodes, vec!["C1", "C2", "C10"]);
    }
}
