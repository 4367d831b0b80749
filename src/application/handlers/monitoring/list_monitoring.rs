//! ListMonitoringHandler - students with their current result, if any.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, JurusanId, Page, PageRequest, Role, UserId};
use crate::domain::periode::KelasLevel;
use crate::domain::rekomendasi::HasilRekomendasi;
use crate::domain::users::{User, UserFilter};
use crate::ports::{HasilRepository, PeriodeRepository, UserRepository};

pub const STATUS_SUDAH: &str = "Sudah Dinilai";
pub const STATUS_BELUM: &str = "Belum Mengisi";

#[derive(Debug, Clone, Default)]
pub struct ListMonitoringQuery {
    pub search: Option<String>,
    pub jurusan_id: Option<JurusanId>,
    pub kelas: Option<KelasLevel>,
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct MonitoringRow {
    pub siswa: User,
    pub hasil: Option<HasilRekomendasi>,
}

impl MonitoringRow {
    pub fn status(&self) -> &'static str {
        if self.hasil.is_some() {
            STATUS_SUDAH
        } else {
            STATUS_BELUM
        }
    }
}

pub struct ListMonitoringHandler {
    users: Arc<dyn UserRepository>,
    hasil: Arc<dyn HasilRepository>,
    periode: Arc<dyn PeriodeRepository>,
}

impl ListMonitoringHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasil: Arc<dyn HasilRepository>,
        periode: Arc<dyn PeriodeRepository>,
    ) -> Self {
        Self {
            users,
            hasil,
            periode,
        }
    }

    /// Results come from the active period, or each student's latest when
    /// no period is active.
    pub async fn handle(&self, query: ListMonitoringQuery) -> Result<Page<MonitoringRow>, DomainError> {
        let filter = UserFilter {
            search: query.search,
            jurusan_id: query.jurusan_id,
            kelas: query.kelas,
            ..UserFilter::role(Role::Siswa)
        };
        let page = self.users.list(&filter, query.page).await?;

        let active = self.periode.active().await?;
        let mut current: HashMap<UserId, HasilRekomendasi> = self
            .hasil
            .current(active.map(|p| p.id))
            .await?
            .into_iter()
            .map(|h| (h.siswa_id, h))
            .collect();

        Ok(page.map(|siswa| MonitoringRow {
            hasil: current.remove(&siswa.id),
            siswa,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::kriteria::Jalur;
    use crate::domain::moora::SkorJalur;
    use crate::domain::rekomendasi::HasilDraft;

    fn draft(siswa: UserId, periode: Option<crate::domain::foundation::PeriodeId>) -> HasilDraft {
        HasilDraft {
            siswa_id: siswa,
            periode_id: periode,
            tingkat_kelas: Some(KelasLevel::DuaBelas),
            skor: SkorJalur::from_scores([0.4, 0.2, 0.1]),
            keputusan: Jalur::Studi,
            riwayat_jawaban: Vec::new(),
        }
    }

    #[tokio::test]
    async fn marks_students_with_results_in_the_active_period() {
        let fx = Fixture::new();
        let old = fx.periode("2024/2025", 1, false).await;
        let active = fx.periode("2025/2026", 2, true).await;
        let done = fx.siswa("ani", KelasLevel::DuaBelas, None).await;
        let stale = fx.siswa("budi", KelasLevel::DuaBelas, None).await;
        HasilRepository::upsert(fx.store.as_ref(), draft(done.id, Some(active.id)))
            .await
            .unwrap();
        HasilRepository::upsert(fx.store.as_ref(), draft(stale.id, Some(old.id)))
            .await
            .unwrap();

        let page = ListMonitoringHandler::new(fx.store.clone(), fx.store.clone(), fx.store.clone())
            .handle(ListMonitoringQuery::default())
            .await
            .unwrap();

        let statuses: Vec<(&str, &str)> = page
            .items
            .iter()
            .map(|r| (r.siswa.username.as_str(), r.status()))
            .collect();
        assert_eq!(statuses, vec![("ani", STATUS_SUDAH), ("budi", STATUS_BELUM)]);
    }

    #[tokio::test]
    async fn without_active_period_uses_latest_result() {
        let fx = Fixture::new();
        let siswa = fx.siswa("ani", KelasLevel::DuaBelas, None).await;
        HasilRepository::upsert(fx.store.as_ref(), draft(siswa.id, None))
            .await
            .unwrap();

        let page = ListMonitoringHandler::new(fx.store.clone(), fx.store.clone(), fx.store.clone())
            .handle(ListMonitoringQuery::default())
            .await
            .unwrap();

        assert_eq!(page.items[0].status(), STATUS_SUDAH);
    }
}
