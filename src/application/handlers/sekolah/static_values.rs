//! Per-major values of static criteria.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{DomainError, JurusanId, KriteriaId};
use crate::domain::kriteria::{natural_sort_by_kode, Kriteria};
use crate::domain::rekomendasi::DEFAULT_STATIC_VALUE;
use crate::domain::sekolah::Jurusan;
use crate::ports::{JurusanRepository, KriteriaRepository};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticValueRow {
    pub kriteria_id: KriteriaId,
    pub kode: String,
    pub nama: String,
    pub skala_maks: f64,
    pub nilai: f64,
}

#[derive(Debug, Clone)]
pub struct StaticValues {
    pub jurusan: Jurusan,
    pub rows: Vec<StaticValueRow>,
}

async fn load(
    jurusan: &dyn JurusanRepository,
    kriteria: &dyn KriteriaRepository,
    id: JurusanId,
) -> Result<(Jurusan, Vec<Kriteria>), DomainError> {
    let found = jurusan
        .find(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Jurusan tidak ditemukan"))?;
    let mut statics: Vec<Kriteria> = kriteria
        .list()
        .await?
        .into_iter()
        .filter(Kriteria::is_static)
        .collect();
    natural_sort_by_kode(&mut statics, |k| k.kode.as_str());
    Ok((found, statics))
}

pub struct GetStaticValuesHandler {
    jurusan: Arc<dyn JurusanRepository>,
    kriteria: Arc<dyn KriteriaRepository>,
}

impl GetStaticValuesHandler {
    pub fn new(jurusan: Arc<dyn JurusanRepository>, kriteria: Arc<dyn KriteriaRepository>) -> Self {
        Self { jurusan, kriteria }
    }

    pub async fn handle(&self, id: JurusanId) -> Result<StaticValues, DomainError> {
        let (jurusan, statics) = load(self.jurusan.as_ref(), self.kriteria.as_ref(), id).await?;
        let stored: HashMap<KriteriaId, f64> = self
            .jurusan
            .static_values(id)
            .await?
            .into_iter()
            .map(|v| (v.kriteria_id, v.nilai))
            .collect();

        let rows = statics
            .into_iter()
            .map(|k| StaticValueRow {
                nilai: stored.get(&k.id).copied().unwrap_or(DEFAULT_STATIC_VALUE),
                kriteria_id: k.id,
                kode: k.kode,
                nama: k.nama,
                skala_maks: k.skala_maks,
            })
            .collect();
        Ok(StaticValues { jurusan, rows })
    }
}

#[derive(Debug, Clone)]
pub struct SaveStaticValuesCommand {
    pub jurusan_id: JurusanId,
    /// Value per criterion code.
    pub values: BTreeMap<String, f64>,
}

pub struct SaveStaticValuesHandler {
    jurusan: Arc<dyn JurusanRepository>,
    kriteria: Arc<dyn KriteriaRepository>,
}

impl SaveStaticValuesHandler {
    pub fn new(jurusan: Arc<dyn JurusanRepository>, kriteria: Arc<dyn KriteriaRepository>) -> Self {
        Self { jurusan, kriteria }
    }

    pub async fn handle(&self, cmd: SaveStaticValuesCommand) -> Result<usize, DomainError> {
        let (jurusan, statics) =
            load(self.jurusan.as_ref(), self.kriteria.as_ref(), cmd.jurusan_id).await?;
        let by_kode: HashMap<&str, &Kriteria> = statics.iter().map(|k| (k.kode.as_str(), k)).collect();

        let mut values = Vec::with_capacity(cmd.values.len());
        for (kode, nilai) in &cmd.values {
            let k = by_kode.get(kode.as_str()).ok_or_else(|| {
                DomainError::validation(
                    "values",
                    format!("Kriteria {} bukan kriteria statis jurusan", kode),
                )
            })?;
            k.tipe_input.validate_answer(&k.kode, *nilai, k.skala_maks)?;
            values.push((k.id, *nilai));
        }

        self.jurusan.save_static_values(jurusan.id, &values).await?;
        tracing::info!(jurusan_id = %jurusan.id, count = values.len(), "static values saved");
        Ok(values.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::kriteria::{Atribut, TipeInputKind};

    #[tokio::test]
    async fn unset_values_default_to_three() {
        let fx = Fixture::new();
        fx.static_kriteria("C7").await;
        fx.kriteria("C1", TipeInputKind::Likert, Atribut::Benefit).await;
        let tkj = fx.jurusan("TKJ", "Teknik Komputer").await;

        let view = GetStaticValuesHandler::new(fx.store.clone(), fx.store.clone())
            .handle(tkj.id)
            .await
            .unwrap();

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].kode, "C7");
        assert_eq!(view.rows[0].nilai, DEFAULT_STATIC_VALUE);
    }

    #[tokio::test]
    async fn saves_by_kode() {
        let fx = Fixture::new();
        fx.static_kriteria("C7").await;
        let tkj = fx.jurusan("TKJ", "Teknik Komputer").await;

        SaveStaticValuesHandler::new(fx.store.clone(), fx.store.clone())
            .handle(SaveStaticValuesCommand {
                jurusan_id: tkj.id,
                values: BTreeMap::from([("C7".to_string(), 5.0)]),
            })
            .await
            .unwrap();

        let view = GetStaticValuesHandler::new(fx.store.clone(), fx.store.clone())
            .handle(tkj.id)
            .await
            .unwrap();
        assert_eq!(view.rows[0].nilai, 5.0);
    }

    #[tokio::test]
    async fn rejects_non_static_kode_and_out_of_scale_values() {
        let fx = Fixture::new();
        fx.static_kriteria("C7").await;
        fx.kriteria("C1", TipeInputKind::Likert, Atribut::Benefit).await;
        let tkj = fx.jurusan("TKJ", "Teknik Komputer").await;
        let handler = SaveStaticValuesHandler::new(fx.store.clone(), fx.store.clone());

        for (kode, nilai) in [("C1", 3.0), ("C7", 9.0)] {
            let result = handler
                .handle(SaveStaticValuesCommand {
                    jurusan_id: tkj.id,
                    values: BTreeMap::from([(kode.to_string(), nilai)]),
                })
                .await;
            assert!(result.is_err(), "{} = {} should be rejected", kode, nilai);
        }
    }
}
