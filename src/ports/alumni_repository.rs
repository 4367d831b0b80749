//! Alumni repository port.

use async_trait::async_trait;

use crate::domain::foundation::{AlumniId, DomainError, Page, PageRequest};
use crate::domain::kriteria::Jalur;
use crate::domain::sekolah::{Alumni, AlumniDraft};

#[async_trait]
pub trait AlumniRepository: Send + Sync {
    /// Alumni matching `query` on name, major or status, latest batch first.
    async fn search(&self, query: Option<&str>, page: PageRequest) -> Result<Page<Alumni>, DomainError>;

    /// Alumni of the student's major whose status matches the pathway
    /// keyword, latest batch first.
    async fn relevant(
        &self,
        nama_jurusan: &str,
        jalur: Jalur,
        limit: u32,
    ) -> Result<Vec<Alumni>, DomainError>;

    async fn create(&self, draft: AlumniDraft) -> Result<Alumni, DomainError>;

    /// # Errors
    ///
    /// - `NotFound` if the record does not exist
    async fn update(&self, id: AlumniId, draft: AlumniDraft) -> Result<Alumni, DomainError>;

    async fn delete(&self, id: AlumniId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alumni_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AlumniRepository>();
    }
}
