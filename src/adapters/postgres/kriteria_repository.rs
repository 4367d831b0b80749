//! PostgreSQL implementation of KriteriaRepository.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, KriteriaId};
use crate::domain::kriteria::{
    natural_sort_by_kode, Atribut, JalurSet, Kategori, Kriteria, KriteriaDefinition, OpsiPilihan,
    PenanggungJawab, SumberNilai, TipeInput, TipeInputKind,
};
use crate::ports::KriteriaRepository;

use super::errors::{corrupt, db_error};

const COLUMNS: &str = "id, kode, nama, pertanyaan, tipe_input, opsi_pilihan, atribut, kategori, \
     sumber_nilai, tampil_di_siswa, penanggung_jawab, skala_maks, target_jalur, jalur_reverse";

pub struct PostgresKriteriaRepository {
    pool: PgPool,
}

impl PostgresKriteriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct KriteriaRow {
    id: i64,
    kode: String,
    nama: String,
    pertanyaan: Option<String>,
    tipe_input: String,
    opsi_pilihan: Option<Json<Vec<OpsiPilihan>>>,
    atribut: String,
    kategori: String,
    sumber_nilai: String,
    tampil_di_siswa: bool,
    penanggung_jawab: String,
    skala_maks: f64,
    target_jalur: String,
    jalur_reverse: String,
}

impl TryFrom<KriteriaRow> for Kriteria {
    type Error = DomainError;

    fn try_from(row: KriteriaRow) -> Result<Self, Self::Error> {
        let kind: TipeInputKind = row
            .tipe_input
            .parse()
            .map_err(|_| corrupt("tipe_input", &row.tipe_input))?;
        let atribut = Atribut::parse(&row.atribut).ok_or_else(|| corrupt("atribut", &row.atribut))?;
        let kategori =
            Kategori::parse(&row.kategori).ok_or_else(|| corrupt("kategori", &row.kategori))?;
        let sumber_nilai = SumberNilai::parse(&row.sumber_nilai)
            .ok_or_else(|| corrupt("sumber_nilai", &row.sumber_nilai))?;
        let penanggung_jawab = PenanggungJawab::parse(&row.penanggung_jawab)
            .ok_or_else(|| corrupt("penanggung_jawab", &row.penanggung_jawab))?;
        let target_jalur =
            JalurSet::parse(&row.target_jalur).map_err(|_| corrupt("target_jalur", &row.target_jalur))?;
        let jalur_reverse = JalurSet::parse(&row.jalur_reverse)
            .map_err(|_| corrupt("jalur_reverse", &row.jalur_reverse))?;

        Ok(Kriteria {
            id: KriteriaId::new(row.id),
            kode: row.kode,
            nama: row.nama,
            pertanyaan: row.pertanyaan,
            tipe_input: TipeInput::from_parts(kind, row.opsi_pilihan.map(|Json(opsi)| opsi)),
            atribut,
            kategori,
            sumber_nilai,
            tampil_di_siswa: row.tampil_di_siswa,
            penanggung_jawab,
            skala_maks: row.skala_maks,
            target_jalur,
            jalur_reverse,
        })
    }
}

/// Options column: only select criteria store any.
fn opsi_column(tipe_input: &TipeInput) -> Option<Json<Vec<OpsiPilihan>>> {
    match tipe_input {
        TipeInput::Select { opsi } => Some(Json(opsi.clone())),
        _ => None,
    }
}

#[async_trait]
impl KriteriaRepository for PostgresKriteriaRepository {
    async fn list(&self) -> Result<Vec<Kriteria>, DomainError> {
        let rows: Vec<KriteriaRow> = sqlx::query_as(&format!("SELECT {} FROM kriteria", COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list kriteria"))?;
        let mut all = rows
            .into_iter()
            .map(Kriteria::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        natural_sort_by_kode(&mut all, |k| k.kode.as_str());
        Ok(all)
    }

    async fn find(&self, id: KriteriaId) -> Result<Option<Kriteria>, DomainError> {
        let row: Option<KriteriaRow> =
            sqlx::query_as(&format!("SELECT {} FROM kriteria WHERE id = $1", COLUMNS))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find kriteria"))?;
        row.map(Kriteria::try_from).transpose()
    }

    async fn create(&self, definition: KriteriaDefinition) -> Result<Kriteria, DomainError> {
        let row: KriteriaRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO kriteria (
                kode, nama, pertanyaan, tipe_input, opsi_pilihan, atribut, kategori,
                sumber_nilai, tampil_di_siswa, penanggung_jawab, skala_maks, target_jalur, jalur_reverse
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&definition.kode)
        .bind(&definition.nama)
        .bind(&definition.pertanyaan)
        .bind(definition.tipe_input.kind().as_str())
        .bind(opsi_column(&definition.tipe_input))
        .bind(definition.atribut.as_str())
        .bind(definition.kategori.as_str())
        .bind(definition.sumber_nilai.as_str())
        .bind(definition.tampil_di_siswa)
        .bind(definition.penanggung_jawab.as_str())
        .bind(definition.skala_maks)
        .bind(definition.target_jalur.to_storage())
        .bind(definition.jalur_reverse.to_storage())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create kriteria"))?;
        Kriteria::try_from(row)
    }

    async fn update(&self, kriteria: &Kriteria) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE kriteria SET
                nama = $2,
                pertanyaan = $3,
                tipe_input = $4,
                opsi_pilihan = $5,
                atribut = $6,
                kategori = $7,
                sumber_nilai = $8,
                tampil_di_siswa = $9,
                penanggung_jawab = $10,
                skala_maks = $11,
                target_jalur = $12,
                jalur_reverse = $13
            WHERE id = $1
            "#,
        )
        .bind(kriteria.id.value())
        .bind(&kriteria.nama)
        .bind(&kriteria.pertanyaan)
        .bind(kriteria.tipe_input.kind().as_str())
        .bind(opsi_column(&kriteria.tipe_input))
        .bind(kriteria.atribut.as_str())
        .bind(kriteria.kategori.as_str())
        .bind(kriteria.sumber_nilai.as_str())
        .bind(kriteria.tampil_di_siswa)
        .bind(kriteria.penanggung_jawab.as_str())
        .bind(kriteria.skala_maks)
        .bind(kriteria.target_jalur.to_storage())
        .bind(kriteria.jalur_reverse.to_storage())
        .execute(&self.pool)
        .await
        .map_err(db_error("update kriteria"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Kriteria tidak ditemukan"));
        }
        Ok(())
    }

    /// Answers, static values, weights and comparisons go with it through
    /// `ON DELETE CASCADE`.
    async fn delete(&self, id: KriteriaId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM kriteria WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete kriteria"))?;
        Ok(result.rows_affected() > 0)
    }
}
