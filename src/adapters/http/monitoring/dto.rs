//! Wire shapes for monitoring.

use serde::{Deserialize, Serialize};

use crate::adapters::http::rekomendasi::HasilResponse;
use crate::application::handlers::monitoring::MonitoringRow;
use crate::domain::foundation::UserId;
use crate::domain::periode::KelasLevel;

#[derive(Debug, Clone, Serialize)]
pub struct MonitoringRowResponse {
    pub id: UserId,
    pub nisn: Option<String>,
    pub name: String,
    pub kelas: Option<KelasLevel>,
    /// Major name, `-` when the student has none.
    pub jurusan: String,
    pub status: &'static str,
    pub hasil: Option<HasilResponse>,
}

impl MonitoringRowResponse {
    pub fn new(row: MonitoringRow, jurusan: String) -> Self {
        let status = row.status();
        Self {
            id: row.siswa.id,
            nisn: row.siswa.nisn,
            name: row.siswa.name,
            kelas: row.siswa.kelas_saat_ini,
            jurusan,
            status,
            hasil: row.hasil.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatatanRequest {
    #[serde(default)]
    pub catatan: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatatanResponse {
    pub msg: String,
    pub catatan: Option<String>,
}
