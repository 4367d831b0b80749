//! PostgreSQL implementation of SettingsRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;
use crate::ports::SettingsRepository;

use super::errors::db_error;

pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn all(&self) -> Result<BTreeMap<String, String>, DomainError> {
        let rows: Vec<(String, String)> = sqlx::query_as("SELECT key, value FROM settings")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("load settings"))?;
        Ok(rows.into_iter().collect())
    }

    async fn set_many(&self, entries: &BTreeMap<String, String>) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin settings"))?;
        for (key, value) in entries {
            sqlx::query(
                r#"
                INSERT INTO settings (key, value) VALUES ($1, $2)
                ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(db_error("save setting"))?;
        }
        tx.commit().await.map_err(db_error("commit settings"))?;
        Ok(())
    }
}
