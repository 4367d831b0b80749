//! PostgreSQL implementation of NilaiSiswaRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, KriteriaId, UserId};
use crate::domain::rekomendasi::NilaiSiswa;
use crate::ports::NilaiSiswaRepository;

use super::errors::db_error;

pub struct PostgresNilaiSiswaRepository {
    pool: PgPool,
}

impl PostgresNilaiSiswaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NilaiSiswaRepository for PostgresNilaiSiswaRepository {
    async fn values_for(&self, siswa_id: UserId) -> Result<HashMap<KriteriaId, f64>, DomainError> {
        let rows: Vec<(i64, f64)> =
            sqlx::query_as("SELECT kriteria_id, nilai_input FROM nilai_siswa WHERE siswa_id = $1")
                .bind(siswa_id.value())
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("load answers"))?;
        Ok(rows
            .into_iter()
            .map(|(kriteria_id, nilai)| (KriteriaId::new(kriteria_id), nilai))
            .collect())
    }

    async fn upsert(&self, values: &[NilaiSiswa]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin answers"))?;
        for v in values {
            sqlx::query(
                r#"
                INSERT INTO nilai_siswa (siswa_id, kriteria_id, nilai_input) VALUES ($1, $2, $3)
                ON CONFLICT (siswa_id, kriteria_id) DO UPDATE SET nilai_input = EXCLUDED.nilai_input
                "#,
            )
            .bind(v.siswa_id.value())
            .bind(v.kriteria_id.value())
            .bind(v.nilai_input)
            .execute(&mut *tx)
            .await
            .map_err(db_error("save answer"))?;
        }
        tx.commit().await.map_err(db_error("commit answers"))?;
        Ok(())
    }
}
