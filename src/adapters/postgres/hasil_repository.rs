//! PostgreSQL implementation of HasilRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, HasilId, PeriodeId, Timestamp, UserId};
use crate::domain::kriteria::Jalur;
use crate::domain::moora::SkorJalur;
use crate::domain::periode::KelasLevel;
use crate::domain::rekomendasi::{HasilDraft, HasilRekomendasi, JawabanSnapshot};
use crate::ports::HasilRepository;

use super::errors::{corrupt, db_error};

const COLUMNS: &str = "h.id, h.siswa_id, h.periode_id, h.tingkat_kelas, h.skor_studi, h.skor_kerja, \
     h.skor_wirausaha, h.keputusan, h.catatan, h.riwayat_jawaban, h.created_at";

pub struct PostgresHasilRepository {
    pool: PgPool,
}

impl PostgresHasilRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HasilRow {
    id: i64,
    siswa_id: i64,
    periode_id: Option<i64>,
    tingkat_kelas: Option<String>,
    skor_studi: f64,
    skor_kerja: f64,
    skor_wirausaha: f64,
    keputusan: String,
    catatan: Option<String>,
    riwayat_jawaban: Json<Vec<JawabanSnapshot>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<HasilRow> for HasilRekomendasi {
    type Error = DomainError;

    fn try_from(row: HasilRow) -> Result<Self, Self::Error> {
        let tingkat_kelas = row
            .tingkat_kelas
            .as_deref()
            .map(|k| k.parse::<KelasLevel>().map_err(|_| corrupt("tingkat_kelas", k)))
            .transpose()?;
        let keputusan =
            Jalur::from_label(&row.keputusan).ok_or_else(|| corrupt("keputusan", &row.keputusan))?;
        Ok(HasilRekomendasi {
            id: HasilId::new(row.id),
            siswa_id: UserId::new(row.siswa_id),
            periode_id: row.periode_id.map(PeriodeId::new),
            tingkat_kelas,
            skor: SkorJalur::from_scores([row.skor_studi, row.skor_kerja, row.skor_wirausaha]),
            keputusan,
            catatan: row.catatan,
            riwayat_jawaban: row.riwayat_jawaban.0,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn collect(rows: Vec<HasilRow>) -> Result<Vec<HasilRekomendasi>, DomainError> {
    rows.into_iter().map(HasilRekomendasi::try_from).collect()
}

#[async_trait]
impl HasilRepository for PostgresHasilRepository {
    /// Updates the row for (siswa, periode) in place, keeping its id and
    /// counsellor note, or inserts a new one.
    async fn upsert(&self, draft: HasilDraft) -> Result<HasilRekomendasi, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin hasil"))?;

        let existing: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id FROM hasil_rekomendasi
            WHERE siswa_id = $1 AND periode_id IS NOT DISTINCT FROM $2
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .bind(draft.siswa_id.value())
        .bind(draft.periode_id.map(|p| p.value()))
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("find hasil"))?;

        let tingkat_kelas = draft.tingkat_kelas.map(|k| k.as_str());
        let riwayat = Json(draft.riwayat_jawaban.clone());
        let row: HasilRow = match existing {
            Some((id,)) => sqlx::query_as(&format!(
                r#"
                UPDATE hasil_rekomendasi h SET
                    tingkat_kelas = $2,
                    skor_studi = $3,
                    skor_kerja = $4,
                    skor_wirausaha = $5,
                    keputusan = $6,
                    riwayat_jawaban = $7,
                    created_at = now()
                WHERE h.id = $1
                RETURNING {}
                "#,
                COLUMNS
            ))
            .bind(id)
            .bind(tingkat_kelas)
            .bind(draft.skor.studi)
            .bind(draft.skor.kerja)
            .bind(draft.skor.wirausaha)
            .bind(draft.keputusan.label())
            .bind(&riwayat)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("update hasil"))?,
            None => sqlx::query_as(&format!(
                r#"
                INSERT INTO hasil_rekomendasi AS h (
                    siswa_id, periode_id, tingkat_kelas, skor_studi, skor_kerja, skor_wirausaha,
                    keputusan, riwayat_jawaban
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING {}
                "#,
                COLUMNS
            ))
            .bind(draft.siswa_id.value())
            .bind(draft.periode_id.map(|p| p.value()))
            .bind(tingkat_kelas)
            .bind(draft.skor.studi)
            .bind(draft.skor.kerja)
            .bind(draft.skor.wirausaha)
            .bind(draft.keputusan.label())
            .bind(&riwayat)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("insert hasil"))?,
        };

        tx.commit().await.map_err(db_error("commit hasil"))?;
        HasilRekomendasi::try_from(row)
    }

    async fn find(&self, id: HasilId) -> Result<Option<HasilRekomendasi>, DomainError> {
        let row: Option<HasilRow> =
            sqlx::query_as(&format!("SELECT {} FROM hasil_rekomendasi h WHERE h.id = $1", COLUMNS))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find hasil"))?;
        row.map(HasilRekomendasi::try_from).transpose()
    }

    async fn latest_for_siswa(&self, siswa_id: UserId) -> Result<Option<HasilRekomendasi>, DomainError> {
        let row: Option<HasilRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM hasil_rekomendasi h
            WHERE h.siswa_id = $1
            ORDER BY h.created_at DESC, h.id DESC
            LIMIT 1
            "#,
            COLUMNS
        ))
        .bind(siswa_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("latest hasil"))?;
        row.map(HasilRekomendasi::try_from).transpose()
    }

    /// Oldest period first; results without a period come before the rest.
    async fn history(&self, siswa_id: UserId) -> Result<Vec<HasilRekomendasi>, DomainError> {
        let rows: Vec<HasilRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM hasil_rekomendasi h
            LEFT JOIN periode p ON p.id = h.periode_id
            WHERE h.siswa_id = $1
            ORDER BY p.urutan ASC NULLS FIRST, h.created_at ASC
            "#,
            COLUMNS
        ))
        .bind(siswa_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("hasil history"))?;
        collect(rows)
    }

    async fn current(&self, periode_id: Option<PeriodeId>) -> Result<Vec<HasilRekomendasi>, DomainError> {
        let rows: Vec<HasilRow> = match periode_id {
            Some(periode_id) => sqlx::query_as(&format!(
                "SELECT {} FROM hasil_rekomendasi h WHERE h.periode_id = $1",
                COLUMNS
            ))
            .bind(periode_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("hasil for periode"))?,
            None => sqlx::query_as(&format!(
                r#"
                SELECT DISTINCT ON (h.siswa_id) {} FROM hasil_rekomendasi h
                ORDER BY h.siswa_id, h.created_at DESC, h.id DESC
                "#,
                COLUMNS
            ))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("latest hasil per siswa"))?,
        };
        collect(rows)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<HasilRekomendasi>, DomainError> {
        let rows: Vec<HasilRow> = sqlx::query_as(&format!(
            "SELECT {} FROM hasil_rekomendasi h ORDER BY h.created_at DESC, h.id DESC LIMIT $1",
            COLUMNS
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("recent hasil"))?;
        collect(rows)
    }

    async fn set_catatan(&self, id: HasilId, catatan: Option<String>) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE hasil_rekomendasi SET catatan = $2 WHERE id = $1")
            .bind(id.value())
            .bind(&catatan)
            .execute(&self.pool)
            .await
            .map_err(db_error("save catatan"))?;
        Ok(result.rows_affected() > 0)
    }
}
