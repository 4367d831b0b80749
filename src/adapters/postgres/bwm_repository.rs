//! PostgreSQL implementation of BwmRepository.
//!
//! Comparisons are stored one row per (pakar, kriteria, direction); the
//! direction is `best_to_others` or `others_to_worst`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::bwm::{BobotKriteria, ComparisonSet};
use crate::domain::foundation::{DomainError, KriteriaId, UserId};
use crate::ports::BwmRepository;

use super::errors::{corrupt, db_error};

const BEST_TO_OTHERS: &str = "best_to_others";
const OTHERS_TO_WORST: &str = "others_to_worst";

pub struct PostgresBwmRepository {
    pool: PgPool,
}

impl PostgresBwmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ComparisonRow {
    kriteria_id: i64,
    arah: String,
    nilai: i16,
}

#[derive(Debug, sqlx::FromRow)]
struct BobotRow {
    kriteria_id: i64,
    pakar_id: i64,
    nilai_bobot: f64,
}

#[async_trait]
impl BwmRepository for PostgresBwmRepository {
    /// Replaces the expert's comparisons and weights in one transaction.
    async fn save_submission(
        &self,
        pakar_id: UserId,
        comparisons: &ComparisonSet,
        weights: &[BobotKriteria],
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("begin bwm submission"))?;

        sqlx::query("DELETE FROM bwm_comparisons WHERE pakar_id = $1")
            .bind(pakar_id.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error("clear comparisons"))?;

        let rows = comparisons
            .best_to_others
            .iter()
            .map(|(k, v)| (BEST_TO_OTHERS, k, v))
            .chain(
                comparisons
                    .others_to_worst
                    .iter()
                    .map(|(k, v)| (OTHERS_TO_WORST, k, v)),
            );
        for (arah, kriteria_id, nilai) in rows {
            sqlx::query(
                "INSERT INTO bwm_comparisons (pakar_id, kriteria_id, arah, nilai) VALUES ($1, $2, $3, $4)",
            )
            .bind(pakar_id.value())
            .bind(kriteria_id.value())
            .bind(arah)
            .bind(i16::from(*nilai))
            .execute(&mut *tx)
            .await
            .map_err(db_error("insert comparison"))?;
        }

        sqlx::query("DELETE FROM bobot_kriteria WHERE pakar_id = $1")
            .bind(pakar_id.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error("clear weights"))?;

        for bobot in weights {
            sqlx::query(
                "INSERT INTO bobot_kriteria (kriteria_id, pakar_id, nilai_bobot) VALUES ($1, $2, $3)",
            )
            .bind(bobot.kriteria_id.value())
            .bind(bobot.pakar_id.value())
            .bind(bobot.nilai_bobot)
            .execute(&mut *tx)
            .await
            .map_err(db_error("insert weight"))?;
        }

        tx.commit().await.map_err(db_error("commit bwm submission"))?;
        Ok(())
    }

    async fn comparisons_for(&self, pakar_id: UserId) -> Result<ComparisonSet, DomainError> {
        let rows: Vec<ComparisonRow> = sqlx::query_as(
            "SELECT kriteria_id, arah, nilai FROM bwm_comparisons WHERE pakar_id = $1",
        )
        .bind(pakar_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("load comparisons"))?;

        let mut set = ComparisonSet::default();
        for row in rows {
            let nilai = u8::try_from(row.nilai).map_err(|_| corrupt("nilai", &row.nilai.to_string()))?;
            let target = match row.arah.as_str() {
                BEST_TO_OTHERS => &mut set.best_to_others,
                OTHERS_TO_WORST => &mut set.others_to_worst,
                other => return Err(corrupt("arah", other)),
            };
            target.insert(KriteriaId::new(row.kriteria_id), nilai);
        }
        Ok(set)
    }

    async fn all_weights(&self) -> Result<Vec<BobotKriteria>, DomainError> {
        let rows: Vec<BobotRow> =
            sqlx::query_as("SELECT kriteria_id, pakar_id, nilai_bobot FROM bobot_kriteria")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("load weights"))?;
        Ok(rows
            .into_iter()
            .map(|r| BobotKriteria::new(KriteriaId::new(r.kriteria_id), UserId::new(r.pakar_id), r.nilai_bobot))
            .collect())
    }
}
