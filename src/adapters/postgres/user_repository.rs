//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, JurusanId, Page, PageRequest, Role, UserId};
use crate::domain::periode::{KelasLevel, PromotionReport, GRADUATE_DEFAULT_MAJOR, GRADUATE_STATUS};
use crate::domain::users::{JenisPakar, NewUser, User, UserFilter};
use crate::ports::{UserCredentials, UserRepository};

use super::errors::{corrupt, db_error, to_i64, to_u64};

const COLUMNS: &str = "id, name, username, email, nisn, role, jenis_pakar, jurusan_id, kelas_saat_ini";

/// Shared WHERE clause for `list` and `count`; binds $1..$4.
const FILTER: &str = r#"
    WHERE ($1::text IS NULL OR role = $1)
      AND ($2::bigint IS NULL OR jurusan_id = $2)
      AND ($3::text IS NULL OR kelas_saat_ini = $3)
      AND ($4::text IS NULL OR name ILIKE $4 OR username ILIKE $4 OR nisn ILIKE $4)
"#;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    username: String,
    email: Option<String>,
    nisn: Option<String>,
    role: String,
    jenis_pakar: Option<String>,
    jurusan_id: Option<i64>,
    kelas_saat_ini: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| corrupt("role", &row.role))?;
        let jenis_pakar = row
            .jenis_pakar
            .as_deref()
            .map(|j| j.parse::<JenisPakar>().map_err(|_| corrupt("jenis_pakar", j)))
            .transpose()?;
        let kelas_saat_ini = row
            .kelas_saat_ini
            .as_deref()
            .map(|k| k.parse::<KelasLevel>().map_err(|_| corrupt("kelas_saat_ini", k)))
            .transpose()?;
        Ok(User {
            id: UserId::new(row.id),
            name: row.name,
            username: row.username,
            email: row.email,
            nisn: row.nisn,
            role,
            jenis_pakar,
            jurusan_id: row.jurusan_id.map(JurusanId::new),
            kelas_saat_ini,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CredentialsRow {
    #[sqlx(flatten)]
    user: UserRow,
    password: String,
}

/// Bind values for the shared filter clause.
struct FilterBinds {
    role: Option<&'static str>,
    jurusan_id: Option<i64>,
    kelas: Option<&'static str>,
    search: Option<String>,
}

impl From<&UserFilter> for FilterBinds {
    fn from(filter: &UserFilter) -> Self {
        Self {
            role: filter.role.map(|r| r.as_str()),
            jurusan_id: filter.jurusan_id.map(|j| j.value()),
            kelas: filter.kelas.map(|k| k.as_str()),
            search: filter
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| format!("%{}%", s)),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", COLUMNS))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("find user"))?;
        row.map(User::try_from).transpose()
    }

    async fn find_credentials(&self, login_id: &str) -> Result<Option<UserCredentials>, DomainError> {
        let row: Option<CredentialsRow> = sqlx::query_as(&format!(
            "SELECT {}, password FROM users WHERE username = $1 OR email = $1 OR nisn = $1 LIMIT 1",
            COLUMNS
        ))
        .bind(login_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("find credentials"))?;

        row.map(|r| {
            Ok(UserCredentials {
                user: User::try_from(r.user)?,
                password_hash: r.password,
            })
        })
        .transpose()
    }

    async fn list(&self, filter: &UserFilter, page: PageRequest) -> Result<Page<User>, DomainError> {
        let binds = FilterBinds::from(filter);
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users {} ORDER BY name, id LIMIT $5 OFFSET $6",
            COLUMNS, FILTER
        ))
        .bind(binds.role)
        .bind(binds.jurusan_id)
        .bind(binds.kelas)
        .bind(&binds.search)
        .bind(to_i64(page.limit()))
        .bind(to_i64(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list users"))?;

        let items = rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let total = self.count(filter).await?;
        Ok(Page::new(items, page, total))
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        let binds = FilterBinds::from(filter);
        let (total,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM users {}", FILTER))
            .bind(binds.role)
            .bind(binds.jurusan_id)
            .bind(binds.kelas)
            .bind(&binds.search)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count users"))?;
        Ok(to_u64(total))
    }

    async fn create(&self, user: NewUser, password_hash: String) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (name, username, email, nisn, password, role, jenis_pakar, jurusan_id, kelas_saat_ini)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.nisn)
        .bind(&password_hash)
        .bind(user.role.as_str())
        .bind(user.jenis_pakar.map(|j| j.as_str()))
        .bind(user.jurusan_id.map(|j| j.value()))
        .bind(user.kelas_saat_ini.map(|k| k.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create user"))?;
        User::try_from(row)
    }

    async fn update(&self, id: UserId, user: NewUser) -> Result<User, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users SET
                name = $2,
                username = $3,
                email = $4,
                nisn = $5,
                role = $6,
                jenis_pakar = $7,
                jurusan_id = $8,
                kelas_saat_ini = $9
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id.value())
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.nisn)
        .bind(user.role.as_str())
        .bind(user.jenis_pakar.map(|j| j.as_str()))
        .bind(user.jurusan_id.map(|j| j.value()))
        .bind(user.kelas_saat_ini.map(|k| k.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("update user"))?;

        match row {
            Some(row) => User::try_from(row),
            None => Err(DomainError::not_found("User tidak ditemukan")),
        }
    }

    async fn set_password(&self, id: UserId, password_hash: String) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password = $2 WHERE id = $1")
            .bind(id.value())
            .bind(&password_hash)
            .execute(&self.pool)
            .await
            .map_err(db_error("set password"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User tidak ditemukan"));
        }
        Ok(())
    }

    /// Answers, results, class history, comparisons and weights cascade.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete user"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Graduates grade 12 first, then moves 11 to 12 and 10 to 11, all in
    /// one transaction so no student moves twice.
    async fn promote_grades(&self, batch: i32) -> Result<PromotionReport, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin promotion"))?;

        sqlx::query(
            r#"
            INSERT INTO alumni (name, status, batch, major)
            SELECT u.name, $2, $1, COALESCE(j.nama_jurusan, $3)
            FROM users u
            LEFT JOIN jurusan j ON j.id = u.jurusan_id
            WHERE u.kelas_saat_ini = '12'
              AND NOT EXISTS (SELECT 1 FROM alumni a WHERE a.name = u.name AND a.batch = $1)
            "#,
        )
        .bind(batch)
        .bind(GRADUATE_STATUS)
        .bind(GRADUATE_DEFAULT_MAJOR)
        .execute(&mut *tx)
        .await
        .map_err(db_error("record graduates"))?;

        let mut moved = [0u64; 3];
        let steps = [
            (KelasLevel::DuaBelas, KelasLevel::Alumni),
            (KelasLevel::Sebelas, KelasLevel::DuaBelas),
            (KelasLevel::Sepuluh, KelasLevel::Sebelas),
        ];
        for (slot, (from, to)) in moved.iter_mut().zip(steps) {
            let result = sqlx::query("UPDATE users SET kelas_saat_ini = $2 WHERE kelas_saat_ini = $1")
                .bind(from.as_str())
                .bind(to.as_str())
                .execute(&mut *tx)
                .await
                .map_err(db_error("promote grade"))?;
            *slot = result.rows_affected();
        }

        tx.commit().await.map_err(db_error("commit promotion"))?;
        Ok(PromotionReport {
            lulus: moved[0],
            naik_ke_12: moved[1],
            naik_ke_11: moved[2],
        })
    }
}
