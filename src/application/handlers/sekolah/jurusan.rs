//! Major CRUD.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, JurusanId};
use crate::domain::sekolah::{Jurusan, JurusanDraft};
use crate::ports::JurusanRepository;

pub struct ListJurusanHandler {
    repo: Arc<dyn JurusanRepository>,
}

impl ListJurusanHandler {
    pub fn new(repo: Arc<dyn JurusanRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self) -> Result<Vec<Jurusan>, DomainError> {
        let mut all = self.repo.list().await?;
        all.sort_by(|a, b| a.kode_jurusan.cmp(&b.kode_jurusan));
        Ok(all)
    }
}

pub struct CreateJurusanHandler {
    repo: Arc<dyn JurusanRepository>,
}

impl CreateJurusanHandler {
    pub fn new(repo: Arc<dyn JurusanRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, draft: JurusanDraft) -> Result<Jurusan, DomainError> {
        let jurusan = self.repo.create(draft.validate()?).await?;
        tracing::info!(jurusan_id = %jurusan.id, kode = %jurusan.kode_jurusan, "jurusan created");
        Ok(jurusan)
    }
}

pub struct UpdateJurusanHandler {
    repo: Arc<dyn JurusanRepository>,
}

impl UpdateJurusanHandler {
    pub fn new(repo: Arc<dyn JurusanRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, id: JurusanId, draft: JurusanDraft) -> Result<Jurusan, DomainError> {
        self.repo.update(id, draft.validate()?).await
    }
}

pub struct DeleteJurusanHandler {
    repo: Arc<dyn JurusanRepository>,
}

impl DeleteJurusanHandler {
    pub fn new(repo: Arc<dyn JurusanRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self, id: JurusanId) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Jurusan tidak ditemukan"));
        }
        tracing::info!(jurusan_id = %id, "jurusan deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;

    fn draft(kode: &str, nama: &str) -> JurusanDraft {
        JurusanDraft {
            kode_jurusan: kode.to_string(),
            nama_jurusan: nama.to_string(),
        }
    }

    #[tokio::test]
    async fn create_normalises_and_rejects_duplicates() {
        let fx = Fixture::new();
        let handler = CreateJurusanHandler::new(fx.store.clone());

        let created = handler.handle(draft("tkj", "Teknik Komputer")).await.unwrap();
        assert_eq!(created.kode_jurusan, "TKJ");

        let err = handler.handle(draft("TKJ", "Lain")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn list_is_ordered_by_kode() {
        let fx = Fixture::new();
        fx.jurusan("TKJ", "Teknik Komputer").await;
        fx.jurusan("AKL", "Akuntansi").await;

        let all = ListJurusanHandler::new(fx.store.clone()).handle().await.unwrap();
        let kode: Vec<&str> = all.iter().map(|j| j.kode_jurusan.as_str()).collect();
        assert_eq!(kode, vec!["AKL", "TKJ"]);
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_not_found() {
        let fx = Fixture::new();
        let missing = JurusanId::new(404);

        let update = UpdateJurusanHandler::new(fx.store.clone())
            .handle(missing, draft("X", "Y"))
            .await;
        assert_eq!(update.unwrap_err().code, ErrorCode::NotFound);

        let delete = DeleteJurusanHandler::new(fx.store.clone()).handle(missing).await;
        assert_eq!(delete.unwrap_err().code, ErrorCode::NotFound);
    }
}
