//! Criteria, BWM, settings, answers and results.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

use crate::domain::bwm::{BobotKriteria, ComparisonSet};
use crate::domain::foundation::{DomainError, HasilId, KriteriaId, PeriodeId, Timestamp, UserId};
use crate::domain::kriteria::{natural_sort_by_kode, Kriteria, KriteriaDefinition};
use crate::domain::rekomendasi::{HasilDraft, HasilRekomendasi, NilaiSiswa};
use crate::ports::{
    BwmRepository, HasilRepository, KriteriaRepository, NilaiSiswaRepository, SettingsRepository,
};

use super::InMemoryStore;

#[async_trait]
impl KriteriaRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Kriteria>, DomainError> {
        let mut all: Vec<Kriteria> = self.read()?.kriteria.values().cloned().collect();
        natural_sort_by_kode(&mut all, |k| k.kode.as_str());
        Ok(all)
    }

    async fn find(&self, id: KriteriaId) -> Result<Option<Kriteria>, DomainError> {
        Ok(self.read()?.kriteria.get(&id).cloned())
    }

    async fn create(&self, definition: KriteriaDefinition) -> Result<Kriteria, DomainError> {
        let mut tables = self.write()?;
        if tables.kriteria.values().any(|k| k.kode == definition.kode) {
            return Err(DomainError::conflict("Kode kriteria sudah digunakan"));
        }
        let id = KriteriaId::new(tables.next_id());
        let kriteria = Kriteria::from_definition(id, definition);
        tables.kriteria.insert(id, kriteria.clone());
        Ok(kriteria)
    }

    async fn update(&self, kriteria: &Kriteria) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        match tables.kriteria.get_mut(&kriteria.id) {
            Some(stored) => {
                *stored = kriteria.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Kriteria tidak ditemukan")),
        }
    }

    async fn delete(&self, id: KriteriaId) -> Result<bool, DomainError> {
        let mut tables = self.write()?;
        if tables.kriteria.remove(&id).is_none() {
            return Ok(false);
        }
        tables.nilai.retain(|(_, k), _| *k != id);
        tables.static_values.retain(|(_, k), _| *k != id);
        tables.bobot.retain(|b| b.kriteria_id != id);
        for set in tables.comparisons.values_mut() {
            set.best_to_others.remove(&id);
            set.others_to_worst.remove(&id);
        }
        Ok(true)
    }
}

#[async_trait]
impl BwmRepository for InMemoryStore {
    async fn save_submission(
        &self,
        pakar_id: UserId,
        comparisons: &ComparisonSet,
        weights: &[BobotKriteria],
    ) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        tables.comparisons.insert(pakar_id, comparisons.clone());
        tables.bobot.retain(|b| b.pakar_id != pakar_id);
        tables.bobot.extend(weights.iter().cloned());
        Ok(())
    }

    async fn comparisons_for(&self, pakar_id: UserId) -> Result<ComparisonSet, DomainError> {
        Ok(self
            .read()?
            .comparisons
            .get(&pakar_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn all_weights(&self) -> Result<Vec<BobotKriteria>, DomainError> {
        Ok(self.read()?.bobot.clone())
    }
}

#[async_trait]
impl SettingsRepository for InMemoryStore {
    async fn all(&self) -> Result<BTreeMap<String, String>, DomainError> {
        Ok(self.read()?.settings.clone())
    }

    async fn set_many(&self, entries: &BTreeMap<String, String>) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        for (key, value) in entries {
            tables.settings.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl NilaiSiswaRepository for InMemoryStore {
    async fn values_for(&self, siswa_id: UserId) -> Result<HashMap<KriteriaId, f64>, DomainError> {
        Ok(self
            .read()?
            .nilai
            .iter()
            .filter(|((siswa, _), _)| *siswa == siswa_id)
            .map(|((_, kriteria), value)| (*kriteria, *value))
            .collect())
    }

    async fn upsert(&self, values: &[NilaiSiswa]) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        for v in values {
            tables.nilai.insert((v.siswa_id, v.kriteria_id), v.nilai_input);
        }
        Ok(())
    }
}

fn newest_first(a: &HasilRekomendasi, b: &HasilRekomendasi) -> std::cmp::Ordering {
    b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
}

#[async_trait]
impl HasilRepository for InMemoryStore {
    async fn upsert(&self, draft: HasilDraft) -> Result<HasilRekomendasi, DomainError> {
        let mut tables = self.write()?;
        let existing = tables
            .hasil
            .values()
            .find(|h| h.siswa_id == draft.siswa_id && h.periode_id == draft.periode_id)
            .map(|h| (h.id, h.catatan.clone()));
        let (id, catatan) = match existing {
            Some(found) => found,
            None => (HasilId::new(tables.next_id()), None),
        };
        let hasil = draft.into_hasil(id, catatan, Timestamp::now());
        tables.hasil.insert(id, hasil.clone());
        Ok(hasil)
    }

    async fn find(&self, id: HasilId) -> Result<Option<HasilRekomendasi>, DomainError> {
        Ok(self.read()?.hasil.get(&id).cloned())
    }

    async fn latest_for_siswa(&self, siswa_id: UserId) -> Result<Option<HasilRekomendasi>, DomainError> {
        let tables = self.read()?;
        let mut own: Vec<&HasilRekomendasi> =
            tables.hasil.values().filter(|h| h.siswa_id == siswa_id).collect();
        own.sort_by(|a, b| newest_first(a, b));
        Ok(own.first().map(|h| (*h).clone()))
    }

    async fn history(&self, siswa_id: UserId) -> Result<Vec<HasilRekomendasi>, DomainError> {
        let tables = self.read()?;
        let mut own: Vec<HasilRekomendasi> = tables
            .hasil
            .values()
            .filter(|h| h.siswa_id == siswa_id)
            .cloned()
            .collect();
        own.sort_by_key(|h| (tables.urutan_of(h.periode_id), h.created_at));
        Ok(own)
    }

    async fn current(&self, periode_id: Option<PeriodeId>) -> Result<Vec<HasilRekomendasi>, DomainError> {
        let tables = self.read()?;
        if let Some(periode_id) = periode_id {
            return Ok(tables
                .hasil
                .values()
                .filter(|h| h.periode_id == Some(periode_id))
                .cloned()
                .collect());
        }
        let mut all: Vec<&HasilRekomendasi> = tables.hasil.values().collect();
        all.sort_by(|a, b| newest_first(a, b));
        let mut latest: BTreeMap<UserId, HasilRekomendasi> = BTreeMap::new();
        for hasil in all {
            latest.entry(hasil.siswa_id).or_insert_with(|| hasil.clone());
        }
        Ok(latest.into_values().collect())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<HasilRekomendasi>, DomainError> {
        let tables = self.read()?;
        let mut all: Vec<HasilRekomendasi> = tables.hasil.values().cloned().collect();
        all.sort_by(newest_first);
        all.truncate(limit as usize);
        Ok(all)
    }

    async fn set_catatan(&self, id: HasilId, catatan: Option<String>) -> Result<bool, DomainError> {
        let mut tables = self.write()?;
        Ok(match tables.hasil.get_mut(&id) {
            Some(hasil) => {
                hasil.catatan = catatan;
                true
            }
            None => false,
        })
    }
}
