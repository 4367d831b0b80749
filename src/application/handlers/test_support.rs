//! Seeded in-memory store shared by the handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryStore;
use crate::domain::foundation::{JurusanId, KriteriaId, Role, UserId};
use crate::domain::kriteria::{test_draft, Atribut, Kriteria, SumberNilai, TipeInputKind};
use crate::domain::periode::{KelasLevel, PeriodPromotion, Periode, RiwayatKelas};
use crate::domain::sekolah::{Jurusan, JurusanDraft, BWM_BEST_KEY, BWM_WORST_KEY};
use crate::domain::users::{JenisPakar, NewUser, User};
use crate::ports::{
    JurusanRepository, KriteriaRepository, PeriodeRepository, SettingsRepository, UserRepository,
};

pub(crate) struct Fixture {
    pub store: Arc<InMemoryStore>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
        }
    }

    pub async fn kriteria(&self, kode: &str, tipe: TipeInputKind, atribut: Atribut) -> Kriteria {
        let mut draft = test_draft(kode, tipe);
        draft.atribut = atribut;
        KriteriaRepository::create(self.store.as_ref(), draft.validate().unwrap())
            .await
            .unwrap()
    }

    pub async fn static_kriteria(&self, kode: &str) -> Kriteria {
        let mut draft = test_draft(kode, TipeInputKind::Likert);
        draft.sumber_nilai = SumberNilai::StaticJurusan;
        draft.tampil_di_siswa = false;
        KriteriaRepository::create(self.store.as_ref(), draft.validate().unwrap())
            .await
            .unwrap()
    }

    pub async fn reference(&self, best: KriteriaId, worst: KriteriaId) {
        let entries = [
            (BWM_BEST_KEY.to_string(), best.to_string()),
            (BWM_WORST_KEY.to_string(), worst.to_string()),
        ]
        .into_iter()
        .collect();
        self.store.set_many(&entries).await.unwrap();
    }

    pub async fn jurusan(&self, kode: &str, nama: &str) -> Jurusan {
        JurusanRepository::create(
            self.store.as_ref(),
            JurusanDraft {
                kode_jurusan: kode.to_string(),
                nama_jurusan: nama.to_string(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn siswa(&self, username: &str, kelas: KelasLevel, jurusan: Option<JurusanId>) -> User {
        let user = NewUser {
            name: format!("Siswa {}", username),
            username: username.to_string(),
            email: None,
            nisn: None,
            role: Role::Siswa,
            jenis_pakar: None,
            jurusan_id: jurusan,
            kelas_saat_ini: Some(kelas),
        };
        UserRepository::create(self.store.as_ref(), user, "plain:123456".to_string())
            .await
            .unwrap()
    }

    pub async fn pakar(&self, username: &str) -> User {
        let user = NewUser {
            name: format!("Pakar {}", username),
            username: username.to_string(),
            email: None,
            nisn: None,
            role: Role::Pakar,
            jenis_pakar: Some(JenisPakar::Gurubk),
            jurusan_id: None,
            kelas_saat_ini: None,
        };
        UserRepository::create(self.store.as_ref(), user, "plain:password123".to_string())
            .await
            .unwrap()
    }

    /// Creates a period and, when `active`, makes it the active one.
    pub async fn periode(&self, nama: &str, urutan: i32, active: bool) -> Periode {
        let periode = PeriodeRepository::create(self.store.as_ref(), nama, urutan)
            .await
            .unwrap();
        if active {
            let previous = self.store.active().await.unwrap().map(|p| p.id);
            self.store
                .activate(periode.id, previous, &PeriodPromotion::default())
                .await
                .unwrap();
        }
        PeriodeRepository::find(self.store.as_ref(), periode.id)
            .await
            .unwrap()
            .unwrap()
    }

    pub async fn enrol(&self, siswa: &User, periode: &Periode, kelas: KelasLevel) {
        self.store
            .upsert_riwayat(&RiwayatKelas::aktif(siswa.id, periode.id, kelas, siswa.jurusan_id))
            .await
            .unwrap();
    }
}

pub(crate) fn pakar_id() -> UserId {
    UserId::new(900)
}
