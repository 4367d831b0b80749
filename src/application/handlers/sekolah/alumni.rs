//! Alumni search and CRUD.

use std::sync::Arc;

use crate::domain::foundation::{AlumniId, DomainError, Page, PageRequest};
use crate::domain::sekolah::{Alumni, AlumniDraft};
use crate::ports::AlumniRepository;

#[derive(Debug, Clone, Default)]
pub struct SearchAlumniQuery {
    pub search: Option<String>,
    pub page: PageRequest,
}

pub struct SearchAlumniHandler {
    repo: Arc<dyn AlumniRepository>,
}

impl SearchAlumniHandler {
    pub fn new(repo: Arc<dyn AlumniRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, query: SearchAlumniQuery) -> Result<Page<Alumni>, DomainError> {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        self.repo.search(search, query.page).await
    }
}

pub struct CreateAlumniHandler {
    repo: Arc<dyn AlumniRepository>,
}

impl CreateAlumniHandler {
    pub fn new(repo: Arc<dyn AlumniRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, draft: AlumniDraft) -> Result<Alumni, DomainError> {
        self.repo.create(draft.validate()?).await
    }
}

pub struct UpdateAlumniHandler {
    repo: Arc<dyn AlumniRepository>,
}

impl UpdateAlumniHandler {
    pub fn new(repo: Arc<dyn AlumniRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, id: AlumniId, draft: AlumniDraft) -> Result<Alumni, DomainError> {
        self.repo.update(id, draft.validate()?).await
    }
}

pub struct DeleteAlumniHandler {
    repo: Arc<dyn AlumniRepository>,
}

impl DeleteAlumniHandler {
    pub fn new(repo: Arc<dyn AlumniRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, id: AlumniId) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Data alumni tidak ditemukan"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;

    fn draft(name: &str, status: &str) -> AlumniDraft {
        AlumniDraft {
            name: name.to_string(),
            status: status.to_string(),
            batch: 2022,
            major: "Akuntansi".to_string(),
        }
    }

    #[tokio::test]
    async fn search_matches_status_and_paginates() {
        let fx = Fixture::new();
        let create = CreateAlumniHandler::new(fx.store.clone());
        create.handle(draft("Rina", "Kuliah di UGM")).await.unwrap();
        create.handle(draft("Budi", "Bekerja di bank")).await.unwrap();

        let page = SearchAlumniHandler::new(fx.store.clone())
            .handle(SearchAlumniQuery {
                search: Some(" kuliah ".to_string()),
                page: PageRequest::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Rina");
        assert!(!page.meta.shows_controls());
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let fx = Fixture::new();
        let result = CreateAlumniHandler::new(fx.store.clone())
            .handle(draft(" ", "Bekerja"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn update_then_delete() {
        let fx = Fixture::new();
        let created = CreateAlumniHandler::new(fx.store.clone())
            .handle(draft("Rina", "Kuliah"))
            .await
            .unwrap();

        let updated = UpdateAlumniHandler::new(fx.store.clone())
            .handle(created.id, draft("Rina", "Wirausaha kuliner"))
            .await
            .unwrap();
        assert_eq!(updated.status, "Wirausaha kuliner");

        let delete = DeleteAlumniHandler::new(fx.store.clone());
        delete.handle(created.id).await.unwrap();
        assert!(delete.handle(created.id).await.is_err());
    }
}
