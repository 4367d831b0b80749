//! Shared state of the in-memory store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::bwm::{BobotKriteria, ComparisonSet};
use crate::domain::foundation::{
    AlumniId, DomainError, ErrorCode, HasilId, JurusanId, KriteriaId, PeriodeId, UserId,
};
use crate::domain::kriteria::Kriteria;
use crate::domain::periode::{Periode, RiwayatKelas};
use crate::domain::rekomendasi::HasilRekomendasi;
use crate::domain::sekolah::{Alumni, Jurusan};
use crate::domain::users::User;

/// Every table, keyed like its Postgres counterpart.
#[derive(Debug, Default)]
pub(super) struct Tables {
    next_id: i64,
    pub kriteria: BTreeMap<KriteriaId, Kriteria>,
    pub comparisons: HashMap<UserId, ComparisonSet>,
    pub bobot: Vec<BobotKriteria>,
    pub settings: BTreeMap<String, String>,
    pub periode: BTreeMap<PeriodeId, Periode>,
    pub riwayat: Vec<RiwayatKelas>,
    pub users: BTreeMap<UserId, (User, String)>,
    pub jurusan: BTreeMap<JurusanId, Jurusan>,
    pub static_values: BTreeMap<(JurusanId, KriteriaId), f64>,
    pub alumni: BTreeMap<AlumniId, Alumni>,
    pub nilai: BTreeMap<(UserId, KriteriaId), f64>,
    pub hasil: BTreeMap<HasilId, HasilRekomendasi>,
}

impl Tables {
    /// Next key; shared across tables like a single sequence.
    pub fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn urutan_of(&self, periode_id: Option<PeriodeId>) -> Option<i32> {
        periode_id.and_then(|id| self.periode.get(&id)).map(|p| p.urutan)
    }
}

/// Thread-safe in-memory implementation of every repository port.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DomainError> {
        self.tables
            .read()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "in-memory store lock poisoned"))
    }

    pub(super) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DomainError> {
        self.tables
            .write()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "in-memory store lock poisoned"))
    }
}
