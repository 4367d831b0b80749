//! PostgreSQL implementation of JurusanRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, JurusanId, KriteriaId};
use crate::domain::sekolah::{Jurusan, JurusanDraft, NilaiStaticJurusan};
use crate::ports::JurusanRepository;

use super::errors::db_error;

pub struct PostgresJurusanRepository {
    pool: PgPool,
}

impl PostgresJurusanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct JurusanRow {
    id: i64,
    kode_jurusan: String,
    nama_jurusan: String,
}

impl From<JurusanRow> for Jurusan {
    fn from(row: JurusanRow) -> Self {
        Jurusan {
            id: JurusanId::new(row.id),
            kode_jurusan: row.kode_jurusan,
            nama_jurusan: row.nama_jurusan,
        }
    }
}

#[async_trait]
impl JurusanRepository for PostgresJurusanRepository {
    async fn list(&self) -> Result<Vec<Jurusan>, DomainError> {
        let rows: Vec<JurusanRow> =
            sqlx::query_as("SELECT id, kode_jurusan, nama_jurusan FROM jurusan ORDER BY kode_jurusan")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("list jurusan"))?;
        Ok(rows.into_iter().map(Jurusan::from).collect())
    }

    async fn find(&self, id: JurusanId) -> Result<Option<Jurusan>, DomainError> {
        let row: Option<JurusanRow> =
            sqlx::query_as("SELECT id, kode_jurusan, nama_jurusan FROM jurusan WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find jurusan"))?;
        Ok(row.map(Jurusan::from))
    }

    async fn create(&self, draft: JurusanDraft) -> Result<Jurusan, DomainError> {
        let row: JurusanRow = sqlx::query_as(
            r#"
            INSERT INTO jurusan (kode_jurusan, nama_jurusan) VALUES ($1, $2)
            RETURNING id, kode_jurusan, nama_jurusan
            "#,
        )
        .bind(&draft.kode_jurusan)
        .bind(&draft.nama_jurusan)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create jurusan"))?;
        Ok(row.into())
    }

    async fn update(&self, id: JurusanId, draft: JurusanDraft) -> Result<Jurusan, DomainError> {
        let row: Option<JurusanRow> = sqlx::query_as(
            r#"
            UPDATE jurusan SET kode_jurusan = $2, nama_jurusan = $3 WHERE id = $1
            RETURNING id, kode_jurusan, nama_jurusan
            "#,
        )
        .bind(id.value())
        .bind(&draft.kode_jurusan)
        .bind(&draft.nama_jurusan)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("update jurusan"))?;
        row.map(Jurusan::from)
            .ok_or_else(|| DomainError::not_found("Jurusan tidak ditemukan"))
    }

    /// Static values cascade; students and class history keep their rows
    /// with a null major.
    async fn delete(&self, id: JurusanId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM jurusan WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete jurusan"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn static_values(&self, id: JurusanId) -> Result<Vec<NilaiStaticJurusan>, DomainError> {
        let rows: Vec<(i64, f64)> = sqlx::query_as(
            "SELECT kriteria_id, nilai FROM nilai_static_jurusan WHERE jurusan_id = $1 ORDER BY kriteria_id",
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("load static values"))?;
        Ok(rows
            .into_iter()
            .map(|(kriteria_id, nilai)| NilaiStaticJurusan {
                jurusan_id: id,
                kriteria_id: KriteriaId::new(kriteria_id),
                nilai,
            })
            .collect())
    }

    async fn save_static_values(
        &self,
        id: JurusanId,
        values: &[(KriteriaId, f64)],
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin static values"))?;
        for (kriteria_id, nilai) in values {
            sqlx::query(
                r#"
                INSERT INTO nilai_static_jurusan (jurusan_id, kriteria_id, nilai) VALUES ($1, $2, $3)
                ON CONFLICT (jurusan_id, kriteria_id) DO UPDATE SET nilai = EXCLUDED.nilai
                "#,
            )
            .bind(id.value())
            .bind(kriteria_id.value())
            .bind(*nilai)
            .execute(&mut *tx)
            .await
            .map_err(db_error("save static value"))?;
        }
        tx.commit().await.map_err(db_error("commit static values"))?;
        Ok(())
    }
}
