//! PostgreSQL implementation of PeriodeRepository.
//!
//! Activation runs in one transaction: the old period is deactivated before
//! the target is activated, so the partial unique index on `is_active` never
//! sees two active rows.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, JurusanId, PeriodeId, UserId};
use crate::domain::periode::{KelasLevel, PeriodPromotion, Periode, RiwayatKelas, StatusAkhir};
use crate::ports::{PeriodeRepository, PeriodeSummary};

use super::errors::{corrupt, db_error, to_u64};

pub struct PostgresPeriodeRepository {
    pool: PgPool,
}

impl PostgresPeriodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PeriodeRow {
    id: i64,
    nama_periode: String,
    urutan: i32,
    is_active: bool,
}

impl From<PeriodeRow> for Periode {
    fn from(row: PeriodeRow) -> Self {
        Periode {
            id: PeriodeId::new(row.id),
            nama_periode: row.nama_periode,
            urutan: row.urutan,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SummaryRow {
    #[sqlx(flatten)]
    periode: PeriodeRow,
    jumlah_siswa: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct RiwayatRow {
    siswa_id: i64,
    periode_id: i64,
    tingkat_kelas: String,
    jurusan_id: Option<i64>,
    status_akhir: String,
}

impl TryFrom<RiwayatRow> for RiwayatKelas {
    type Error = DomainError;

    fn try_from(row: RiwayatRow) -> Result<Self, Self::Error> {
        let tingkat_kelas: KelasLevel = row
            .tingkat_kelas
            .parse()
            .map_err(|_| corrupt("tingkat_kelas", &row.tingkat_kelas))?;
        let status_akhir = StatusAkhir::parse(&row.status_akhir)
            .ok_or_else(|| corrupt("status_akhir", &row.status_akhir))?;
        Ok(RiwayatKelas {
            siswa_id: UserId::new(row.siswa_id),
            periode_id: PeriodeId::new(row.periode_id),
            tingkat_kelas,
            jurusan_id: row.jurusan_id.map(JurusanId::new),
            status_akhir,
        })
    }
}

const RIWAYAT_COLUMNS: &str = "siswa_id, periode_id, tingkat_kelas, jurusan_id, status_akhir";

#[async_trait]
impl PeriodeRepository for PostgresPeriodeRepository {
    async fn list(&self) -> Result<Vec<PeriodeSummary>, DomainError> {
        let rows: Vec<SummaryRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.nama_periode, p.urutan, p.is_active, COUNT(r.siswa_id) AS jumlah_siswa
            FROM periode p
            LEFT JOIN riwayat_kelas r ON r.periode_id = p.id
            GROUP BY p.id
            ORDER BY p.urutan DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list periode"))?;

        Ok(rows
            .into_iter()
            .map(|row| PeriodeSummary {
                periode: row.periode.into(),
                jumlah_siswa: to_u64(row.jumlah_siswa),
            })
            .collect())
    }

    async fn find(&self, id: PeriodeId) -> Result<Option<Periode>, DomainError> {
        let row: Option<PeriodeRow> =
            sqlx::query_as("SELECT id, nama_periode, urutan, is_active FROM periode WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find periode"))?;
        Ok(row.map(Periode::from))
    }

    async fn active(&self) -> Result<Option<Periode>, DomainError> {
        let row: Option<PeriodeRow> =
            sqlx::query_as("SELECT id, nama_periode, urutan, is_active FROM periode WHERE is_active")
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find active periode"))?;
        Ok(row.map(Periode::from))
    }

    async fn create(&self, nama_periode: &str, urutan: i32) -> Result<Periode, DomainError> {
        let row: PeriodeRow = sqlx::query_as(
            r#"
            INSERT INTO periode (nama_periode, urutan, is_active) VALUES ($1, $2, FALSE)
            RETURNING id, nama_periode, urutan, is_active
            "#,
        )
        .bind(nama_periode)
        .bind(urutan)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create periode"))?;
        Ok(row.into())
    }

    async fn update(&self, periode: &Periode) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE periode SET nama_periode = $2, urutan = $3 WHERE id = $1")
            .bind(periode.id.value())
            .bind(&periode.nama_periode)
            .bind(periode.urutan)
            .execute(&self.pool)
            .await
            .map_err(db_error("update periode"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Periode tidak ditemukan"));
        }
        Ok(())
    }

    /// Class history cascades; results keep their row with a null period.
    async fn delete(&self, id: PeriodeId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM periode WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete periode"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn activate(
        &self,
        target: PeriodeId,
        previous: Option<PeriodeId>,
        promotion: &PeriodPromotion,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin activation"))?;

        sqlx::query("UPDATE periode SET is_active = FALSE WHERE is_active AND id <> $1")
            .bind(target.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error("deactivate periode"))?;

        let activated = sqlx::query("UPDATE periode SET is_active = TRUE WHERE id = $1")
            .bind(target.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error("activate periode"))?;
        if activated.rows_affected() == 0 {
            return Err(DomainError::not_found("Periode tidak ditemukan"));
        }

        for row in &promotion.promoted {
            sqlx::query(
                r#"
                INSERT INTO riwayat_kelas (siswa_id, periode_id, tingkat_kelas, jurusan_id, status_akhir)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (siswa_id, periode_id) DO NOTHING
                "#,
            )
            .bind(row.siswa_id.value())
            .bind(row.periode_id.value())
            .bind(row.tingkat_kelas.as_str())
            .bind(row.jurusan_id.map(|j| j.value()))
            .bind(row.status_akhir.as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error("insert promoted riwayat"))?;
        }

        if let Some(previous) = previous {
            let graduated: Vec<i64> = promotion.graduated.iter().map(|id| id.value()).collect();
            if !graduated.is_empty() {
                sqlx::query(
                    "UPDATE riwayat_kelas SET status_akhir = $3 WHERE periode_id = $1 AND siswa_id = ANY($2)",
                )
                .bind(previous.value())
                .bind(&graduated)
                .bind(StatusAkhir::Lulus.as_str())
                .execute(&mut *tx)
                .await
                .map_err(db_error("mark graduates"))?;
            }
        }

        tx.commit().await.map_err(db_error("commit activation"))?;
        Ok(())
    }

    async fn riwayat_in(&self, periode_id: PeriodeId) -> Result<Vec<RiwayatKelas>, DomainError> {
        let rows: Vec<RiwayatRow> = sqlx::query_as(&format!(
            "SELECT {} FROM riwayat_kelas WHERE periode_id = $1",
            RIWAYAT_COLUMNS
        ))
        .bind(periode_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list riwayat"))?;
        rows.into_iter().map(RiwayatKelas::try_from).collect()
    }

    async fn riwayat(
        &self,
        siswa_id: UserId,
        periode_id: PeriodeId,
    ) -> Result<Option<RiwayatKelas>, DomainError> {
        let row: Option<RiwayatRow> = sqlx::query_as(&format!(
            "SELECT {} FROM riwayat_kelas WHERE siswa_id = $1 AND periode_id = $2",
            RIWAYAT_COLUMNS
        ))
        .bind(siswa_id.value())
        .bind(periode_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("find riwayat"))?;
        row.map(RiwayatKelas::try_from).transpose()
    }

    async fn upsert_riwayat(&self, riwayat: &RiwayatKelas) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO riwayat_kelas (siswa_id, periode_id, tingkat_kelas, jurusan_id, status_akhir)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (siswa_id, periode_id) DO UPDATE SET
                tingkat_kelas = EXCLUDED.tingkat_kelas,
                jurusan_id = EXCLUDED.jurusan_id,
                status_akhir = EXCLUDED.status_akhir
            "#,
        )
        .bind(riwayat.siswa_id.value())
        .bind(riwayat.periode_id.value())
        .bind(riwayat.tingkat_kelas.as_str())
        .bind(riwayat.jurusan_id.map(|j| j.value()))
        .bind(riwayat.status_akhir.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_error("save riwayat"))?;
        Ok(())
    }
}
