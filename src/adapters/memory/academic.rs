//! Periods, class history, majors and alumni.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::foundation::{AlumniId, DomainError, JurusanId, KriteriaId, Page, PageRequest, PeriodeId, UserId};
use crate::domain::kriteria::Jalur;
use crate::domain::periode::{PeriodPromotion, Periode, RiwayatKelas, StatusAkhir};
use crate::domain::sekolah::{Alumni, AlumniDraft, Jurusan, JurusanDraft, NilaiStaticJurusan};
use crate::ports::{AlumniRepository, JurusanRepository, PeriodeRepository, PeriodeSummary};

use super::store::Tables;
use super::InMemoryStore;

fn check_periode_unique(tables: &Tables, candidate: &Periode) -> Result<(), DomainError> {
    for other in tables.periode.values().filter(|p| p.id != candidate.id) {
        if other.nama_periode == candidate.nama_periode {
            return Err(DomainError::conflict("Nama periode sudah digunakan"));
        }
        if other.urutan == candidate.urutan {
            return Err(DomainError::conflict("Urutan periode sudah digunakan"));
        }
    }
    Ok(())
}

#[async_trait]
impl PeriodeRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<PeriodeSummary>, DomainError> {
        let tables = self.read()?;
        let mut all: Vec<PeriodeSummary> = tables
            .periode
            .values()
            .map(|p| PeriodeSummary {
                periode: p.clone(),
                jumlah_siswa: tables.riwayat.iter().filter(|r| r.periode_id == p.id).count() as u64,
            })
            .collect();
        all.sort_by(|a, b| b.periode.urutan.cmp(&a.periode.urutan));
        Ok(all)
    }

    async fn find(&self, id: PeriodeId) -> Result<Option<Periode>, DomainError> {
        Ok(self.read()?.periode.get(&id).cloned())
    }

    async fn active(&self) -> Result<Option<Periode>, DomainError> {
        Ok(self.read()?.periode.values().find(|p| p.is_active).cloned())
    }

    async fn create(&self, nama_periode: &str, urutan: i32) -> Result<Periode, DomainError> {
        let mut tables = self.write()?;
        let periode = Periode {
            id: PeriodeId::new(0),
            nama_periode: nama_periode.to_string(),
            urutan,
            is_active: false,
        };
        check_periode_unique(&tables, &periode)?;
        let periode = Periode {
            id: PeriodeId::new(tables.next_id()),
            ..periode
        };
        tables.periode.insert(periode.id, periode.clone());
        Ok(periode)
    }

    async fn update(&self, periode: &Periode) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        if !tables.periode.contains_key(&periode.id) {
            return Err(DomainError::not_found("Periode tidak ditemukan"));
        }
        check_periode_unique(&tables, periode)?;
        if let Some(stored) = tables.periode.get_mut(&periode.id) {
            stored.nama_periode = periode.nama_periode.clone();
            stored.urutan = periode.urutan;
        }
        Ok(())
    }

    async fn delete(&self, id: PeriodeId) -> Result<bool, DomainError> {
        let mut tables = self.write()?;
        if tables.periode.remove(&id).is_none() {
            return Ok(false);
        }
        tables.riwayat.retain(|r| r.periode_id != id);
        for hasil in tables.hasil.values_mut().filter(|h| h.periode_id == Some(id)) {
            hasil.periode_id = None;
        }
        Ok(true)
    }

    async fn activate(
        &self,
        target: PeriodeId,
        previous: Option<PeriodeId>,
        promotion: &PeriodPromotion,
    ) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        if !tables.periode.contains_key(&target) {
            return Err(DomainError::not_found("Periode tidak ditemukan"));
        }
        for periode in tables.periode.values_mut() {
            periode.is_active = periode.id == target;
        }

        let present: HashSet<UserId> = tables
            .riwayat
            .iter()
            .filter(|r| r.periode_id == target)
            .map(|r| r.siswa_id)
            .collect();
        for row in &promotion.promoted {
            if !present.contains(&row.siswa_id) {
                tables.riwayat.push(row.clone());
            }
        }

        if let Some(previous) = previous {
            let graduated: HashSet<UserId> = promotion.graduated.iter().copied().collect();
            for row in tables
                .riwayat
                .iter_mut()
                .filter(|r| r.periode_id == previous && graduated.contains(&r.siswa_id))
            {
                row.status_akhir = StatusAkhir::Lulus;
            }
        }
        Ok(())
    }

    async fn riwayat_in(&self, periode_id: PeriodeId) -> Result<Vec<RiwayatKelas>, DomainError> {
        Ok(self
            .read()?
            .riwayat
            .iter()
            .filter(|r| r.periode_id == periode_id)
            .cloned()
            .collect())
    }

    async fn riwayat(
        &self,
        siswa_id: UserId,
        periode_id: PeriodeId,
    ) -> Result<Option<RiwayatKelas>, DomainError> {
        Ok(self
            .read()?
            .riwayat
            .iter()
            .find(|r| r.siswa_id == siswa_id && r.periode_id == periode_id)
            .cloned())
    }

    async fn upsert_riwayat(&self, riwayat: &RiwayatKelas) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        tables
            .riwayat
            .retain(|r| !(r.siswa_id == riwayat.siswa_id && r.periode_id == riwayat.periode_id));
        tables.riwayat.push(riwayat.clone());
        Ok(())
    }
}

fn check_kode_jurusan(tables: &Tables, id: Option<JurusanId>, kode: &str) -> Result<(), DomainError> {
    let taken = tables
        .jurusan
        .values()
        .any(|j| Some(j.id) != id && j.kode_jurusan == kode);
    if taken {
        return Err(DomainError::conflict("Kode jurusan sudah digunakan"));
    }
    Ok(())
}

#[async_trait]
impl JurusanRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Jurusan>, DomainError> {
        let mut all: Vec<Jurusan> = self.read()?.jurusan.values().cloned().collect();
        all.sort_by(|a, b| a.kode_jurusan.cmp(&b.kode_jurusan));
        Ok(all)
    }

    async fn find(&self, id: JurusanId) -> Result<Option<Jurusan>, DomainError> {
        Ok(self.read()?.jurusan.get(&id).cloned())
    }

    async fn create(&self, draft: JurusanDraft) -> Result<Jurusan, DomainError> {
        let mut tables = self.write()?;
        check_kode_jurusan(&tables, None, &draft.kode_jurusan)?;
        let jurusan = Jurusan {
            id: JurusanId::new(tables.next_id()),
            kode_jurusan: draft.kode_jurusan,
            nama_jurusan: draft.nama_jurusan,
        };
        tables.jurusan.insert(jurusan.id, jurusan.clone());
        Ok(jurusan)
    }

    async fn update(&self, id: JurusanId, draft: JurusanDraft) -> Result<Jurusan, DomainError> {
        let mut tables = self.write()?;
        if !tables.jurusan.contains_key(&id) {
            return Err(DomainError::not_found("Jurusan tidak ditemukan"));
        }
        check_kode_jurusan(&tables, Some(id), &draft.kode_jurusan)?;
        let jurusan = Jurusan {
            id,
            kode_jurusan: draft.kode_jurusan,
            nama_jurusan: draft.nama_jurusan,
        };
        tables.jurusan.insert(id, jurusan.clone());
        Ok(jurusan)
    }

    async fn delete(&self, id: JurusanId) -> Result<bool, DomainError> {
        let mut tables = self.write()?;
        if tables.jurusan.remove(&id).is_none() {
            return Ok(false);
        }
        tables.static_values.retain(|(j, _), _| *j != id);
        for (user, _) in tables.users.values_mut() {
            if user.jurusan_id == Some(id) {
                user.jurusan_id = None;
            }
        }
        for row in tables.riwayat.iter_mut().filter(|r| r.jurusan_id == Some(id)) {
            row.jurusan_id = None;
        }
        Ok(true)
    }

    async fn static_values(&self, id: JurusanId) -> Result<Vec<NilaiStaticJurusan>, DomainError> {
        Ok(self
            .read()?
            .static_values
            .iter()
            .filter(|((j, _), _)| *j == id)
            .map(|((jurusan_id, kriteria_id), nilai)| NilaiStaticJurusan {
                jurusan_id: *jurusan_id,
                kriteria_id: *kriteria_id,
                nilai: *nilai,
            })
            .collect())
    }

    async fn save_static_values(
        &self,
        id: JurusanId,
        values: &[(KriteriaId, f64)],
    ) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        for (kriteria_id, nilai) in values {
            tables.static_values.insert((id, *kriteria_id), *nilai);
        }
        Ok(())
    }
}

#[async_trait]
impl AlumniRepository for InMemoryStore {
    async fn search(&self, query: Option<&str>, page: PageRequest) -> Result<Page<Alumni>, DomainError> {
        let tables = self.read()?;
        let mut matching: Vec<Alumni> = tables
            .alumni
            .values()
            .filter(|a| query.map_or(true, |q| a.matches_search(q)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.batch.cmp(&a.batch).then(a.name.cmp(&b.name)));
        Ok(Page::from_vec(matching, page))
    }

    async fn relevant(
        &self,
        nama_jurusan: &str,
        jalur: Jalur,
        limit: u32,
    ) -> Result<Vec<Alumni>, DomainError> {
        let tables = self.read()?;
        let mut matching: Vec<Alumni> = tables
            .alumni
            .values()
            .filter(|a| a.is_relevant(nama_jurusan, jalur))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.batch.cmp(&a.batch));
        matching.truncate(limit as usize);
        Ok(matching)
    }

    async fn create(&self, draft: AlumniDraft) -> Result<Alumni, DomainError> {
        let mut tables = self.write()?;
        let alumni = Alumni {
            id: AlumniId::new(tables.next_id()),
            name: draft.name,
            status: draft.status,
            batch: draft.batch,
            major: draft.major,
        };
        tables.alumni.insert(alumni.id, alumni.clone());
        Ok(alumni)
    }

    async fn update(&self, id: AlumniId, draft: AlumniDraft) -> Result<Alumni, DomainError> {
        let mut tables = self.write()?;
        let Some(stored) = tables.alumni.get_mut(&id) else {
            return Err(DomainError::not_found("Data alumni tidak ditemukan"));
        };
        *stored = Alumni {
            id,
            name: draft.name,
            status: draft.status,
            batch: draft.batch,
            major: draft.major,
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: AlumniId) -> Result<bool, DomainError> {
        Ok(self.write()?.alumni.remove(&id).is_some())
    }
}
