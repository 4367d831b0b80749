//! PostgreSQL adapters - sqlx implementations of the repository ports.
//!
//! One struct per port, each holding a clone of the shared `PgPool`.
//! Multi-table writes (period activation, grade promotion, BWM submission,
//! result upsert) run in a single transaction. Cascades and the
//! one-active-period rule live in `migrations/`.

mod alumni_repository;
mod bwm_repository;
mod errors;
mod hasil_repository;
mod jurusan_repository;
mod kriteria_repository;
mod nilai_repository;
mod periode_repository;
mod settings_repository;
mod user_repository;

pub use alumni_repository::PostgresAlumniRepository;
pub use bwm_repository::PostgresBwmRepository;
pub use hasil_repository::PostgresHasilRepository;
pub use jurusan_repository::PostgresJurusanRepository;
pub use kriteria_repository::PostgresKriteriaRepository;
pub use nilai_repository::PostgresNilaiSiswaRepository;
pub use periode_repository::PostgresPeriodeRepository;
pub use settings_repository::PostgresSettingsRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::PgPool;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
