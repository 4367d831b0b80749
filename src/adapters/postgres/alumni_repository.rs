//! PostgreSQL implementation of AlumniRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{AlumniId, DomainError, Page, PageRequest};
use crate::domain::kriteria::Jalur;
use crate::domain::sekolah::{Alumni, AlumniDraft};
use crate::ports::AlumniRepository;

use super::errors::{db_error, to_i64, to_u64};

pub struct PostgresAlumniRepository {
    pool: PgPool,
}

impl PostgresAlumniRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AlumniRow {
    id: i64,
    name: String,
    status: String,
    batch: i32,
    major: String,
}

impl From<AlumniRow> for Alumni {
    fn from(row: AlumniRow) -> Self {
        Alumni {
            id: AlumniId::new(row.id),
            name: row.name,
            status: row.status,
            batch: row.batch,
            major: row.major,
        }
    }
}

fn like_pattern(raw: &str) -> String {
    format!("%{}%", raw.trim())
}

#[async_trait]
impl AlumniRepository for PostgresAlumniRepository {
    async fn search(&self, query: Option<&str>, page: PageRequest) -> Result<Page<Alumni>, DomainError> {
        let pattern = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(like_pattern);

        let rows: Vec<AlumniRow> = sqlx::query_as(
            r#"
            SELECT id, name, status, batch, major FROM alumni
            WHERE ($1::text IS NULL OR name ILIKE $1 OR major ILIKE $1 OR status ILIKE $1)
            ORDER BY batch DESC, name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(to_i64(page.limit()))
        .bind(to_i64(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("search alumni"))?;

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM alumni
            WHERE ($1::text IS NULL OR name ILIKE $1 OR major ILIKE $1 OR status ILIKE $1)
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("count alumni"))?;

        Ok(Page::new(
            rows.into_iter().map(Alumni::from).collect(),
            page,
            to_u64(total),
        ))
    }

    async fn relevant(
        &self,
        nama_jurusan: &str,
        jalur: Jalur,
        limit: u32,
    ) -> Result<Vec<Alumni>, DomainError> {
        let rows: Vec<AlumniRow> = sqlx::query_as(
            r#"
            SELECT id, name, status, batch, major FROM alumni
            WHERE major ILIKE $1 AND status ILIKE $2
            ORDER BY batch DESC
            LIMIT $3
            "#,
        )
        .bind(like_pattern(nama_jurusan))
        .bind(like_pattern(jalur.alumni_keyword()))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("relevant alumni"))?;
        Ok(rows.into_iter().map(Alumni::from).collect())
    }

    async fn create(&self, draft: AlumniDraft) -> Result<Alumni, DomainError> {
        let row: AlumniRow = sqlx::query_as(
            r#"
            INSERT INTO alumni (name, status, batch, major) VALUES ($1, $2, $3, $4)
            RETURNING id, name, status, batch, major
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.status)
        .bind(draft.batch)
        .bind(&draft.major)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create alumni"))?;
        Ok(row.into())
    }

    async fn update(&self, id: AlumniId, draft: AlumniDraft) -> Result<Alumni, DomainError> {
        let row: Option<AlumniRow> = sqlx::query_as(
            r#"
            UPDATE alumni SET name = $2, status = $3, batch = $4, major = $5 WHERE id = $1
            RETURNING id, name, status, batch, major
            "#,
        )
        .bind(id.value())
        .bind(&draft.name)
        .bind(&draft.status)
        .bind(draft.batch)
        .bind(&draft.major)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("update alumni"))?;
        row.map(Alumni::from)
            .ok_or_else(|| DomainError::not_found("Data alumni tidak ditemukan"))
    }

    async fn delete(&self, id: AlumniId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM alumni WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete alumni"))?;
        Ok(result.rows_affected() > 0)
    }
}
