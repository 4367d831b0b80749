//! GetDashboardStatsHandler - totals for staff, history for students.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{
    AuthenticatedUser, DomainError, HasilId, JurusanId, PeriodeId, Role, Timestamp,
};
use crate::domain::kriteria::Jalur;
use crate::domain::periode::KelasLevel;
use crate::domain::rekomendasi::periode_label;
use crate::domain::users::UserFilter;
use crate::ports::{HasilRepository, JurusanRepository, PeriodeRepository, UserRepository};

/// Number of results in the staff recap.
pub const RECENT_LIMIT: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecisionCounts {
    pub total_siswa: u64,
    pub sudah_mengisi: u64,
    pub belum_mengisi: u64,
    pub rekomendasi_studi: u64,
    pub rekomendasi_kerja: u64,
    pub rekomendasi_wirausaha: u64,
}

/// Parallel label/value series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentResult {
    pub id: HasilId,
    pub nama: String,
    pub jurusan: String,
    pub nilai_optima: f64,
    pub keputusan: String,
    pub tanggal: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffDashboard {
    pub role: Role,
    pub stats: DecisionCounts,
    pub chart_distribution: Distribution,
    pub kelas_distribution: Distribution,
    pub rekapitulasi: Vec<RecentResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: HasilId,
    pub label: String,
    pub kelas: Option<KelasLevel>,
    pub skor_studi: f64,
    pub skor_kerja: f64,
    pub skor_wirausaha: f64,
    pub keputusan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiswaDashboard {
    pub role: Role,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DashboardStats {
    Staff(StaffDashboard),
    Siswa(SiswaDashboard),
}

pub struct GetDashboardStatsHandler {
    users: Arc<dyn UserRepository>,
    hasil: Arc<dyn HasilRepository>,
    periode: Arc<dyn PeriodeRepository>,
    jurusan: Arc<dyn JurusanRepository>,
}

impl GetDashboardStatsHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasil: Arc<dyn HasilRepository>,
        periode: Arc<dyn PeriodeRepository>,
        jurusan: Arc<dyn JurusanRepository>,
    ) -> Self {
        Self {
            users,
            hasil,
            periode,
            jurusan,
        }
    }

    pub async fn handle(&self, viewer: &AuthenticatedUser) -> Result<DashboardStats, DomainError> {
        match viewer.role {
            Role::Admin | Role::Pakar => Ok(DashboardStats::Staff(self.staff(viewer.role).await?)),
            Role::Siswa => Ok(DashboardStats::Siswa(self.siswa(viewer).await?)),
        }
    }

    /// Counts use each student's latest result, so a student is counted once.
    async fn staff(&self, role: Role) -> Result<StaffDashboard, DomainError> {
        let siswa_filter = UserFilter::role(Role::Siswa);
        let total_siswa = self.users.count(&siswa_filter).await?;
        let latest = self.hasil.current(None).await?;

        let mut per_jalur = [0u64; 3];
        for hasil in &latest {
            per_jalur[hasil.keputusan.index()] += 1;
        }
        let sudah_mengisi = latest.len() as u64;
        let stats = DecisionCounts {
            total_siswa,
            sudah_mengisi,
            belum_mengisi: total_siswa.saturating_sub(sudah_mengisi),
            rekomendasi_studi: per_jalur[Jalur::Studi.index()],
            rekomendasi_kerja: per_jalur[Jalur::Kerja.index()],
            rekomendasi_wirausaha: per_jalur[Jalur::Wirausaha.index()],
        };

        let mut kelas_counts = Vec::with_capacity(KelasLevel::GRADES.len());
        for kelas in KelasLevel::GRADES {
            let filter = UserFilter {
                kelas: Some(kelas),
                ..UserFilter::role(Role::Siswa)
            };
            kelas_counts.push(self.users.count(&filter).await?);
        }

        Ok(StaffDashboard {
            role,
            stats,
            chart_distribution: Distribution {
                labels: Jalur::ALL.iter().map(|j| j.label().to_string()).collect(),
                data: per_jalur.to_vec(),
            },
            kelas_distribution: Distribution {
                labels: KelasLevel::GRADES
                    .iter()
                    .map(|k| format!("Kelas {}", k))
                    .collect(),
                data: kelas_counts,
            },
            rekapitulasi: self.recent().await?,
        })
    }

    async fn recent(&self) -> Result<Vec<RecentResult>, DomainError> {
        let mut jurusan_names: HashMap<JurusanId, String> = HashMap::new();
        let mut rows = Vec::new();
        for hasil in self.hasil.recent(RECENT_LIMIT).await? {
            let siswa = self.users.find(hasil.siswa_id).await?;
            let jurusan = match siswa.as_ref().and_then(|s| s.jurusan_id) {
                Some(id) => match jurusan_names.get(&id) {
                    Some(name) => name.clone(),
                    None => {
                        let name = self
                            .jurusan
                            .find(id)
                            .await?
                            .map(|j| j.nama_jurusan)
                            .unwrap_or_else(|| "-".to_string());
                        jurusan_names.insert(id, name.clone());
                        name
                    }
                },
                None => "-".to_string(),
            };
            rows.push(RecentResult {
                id: hasil.id,
                nama: siswa.map(|s| s.name).unwrap_or_else(|| "-".to_string()),
                jurusan,
                nilai_optima: hasil.skor_tertinggi(),
                keputusan: hasil.keputusan.label().to_string(),
                tanggal: hasil.created_at,
            });
        }
        Ok(rows)
    }

    async fn siswa(&self, viewer: &AuthenticatedUser) -> Result<SiswaDashboard, DomainError> {
        let mut names: HashMap<PeriodeId, Option<String>> = HashMap::new();
        let mut history = Vec::new();
        for hasil in self.hasil.history(viewer.id).await? {
            let nama = match hasil.periode_id {
                Some(id) => match names.get(&id) {
                    Some(nama) => nama.clone(),
                    None => {
                        let nama = self.periode.find(id).await?.map(|p| p.nama_periode);
                        names.insert(id, nama.clone());
                        nama
                    }
                },
                None => None,
            };
            history.push(HistoryEntry {
                id: hasil.id,
                label: periode_label(nama.as_deref(), hasil.tingkat_kelas),
                kelas: hasil.tingkat_kelas,
                skor_studi: hasil.skor.studi,
                skor_kerja: hasil.skor.kerja,
                skor_wirausaha: hasil.skor.wirausaha,
                keputusan: hasil.keputusan.label().to_string(),
            });
        }
        Ok(SiswaDashboard {
            role: Role::Siswa,
            history,
        })
    }
}
