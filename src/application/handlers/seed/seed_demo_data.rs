//! SeedDemoDataHandler - loads the demonstration school.
//!
//! Safe to run repeatedly: records that already exist (by code, username or
//! period name) are left alone.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, JurusanId, Role};
use crate::domain::kriteria::{
    Atribut, Jalur, JalurSet, Kategori, KriteriaDraft, OpsiPilihan, PenanggungJawab, SumberNilai,
    TipeInputKind,
};
use crate::domain::periode::{KelasLevel, PeriodPromotion, Periode, RiwayatKelas};
use crate::domain::sekolah::JurusanDraft;
use crate::domain::users::{
    JenisPakar, NewUser, User, DEFAULT_PAKAR_PASSWORD, DEFAULT_SISWA_PASSWORD,
};
use crate::ports::{
    JurusanRepository, KriteriaRepository, PasswordHasher, PeriodeRepository, SettingsRepository,
    UserRepository,
};

const JURUSAN: [(&str, &str); 5] = [
    ("TKJ", "Teknik Komputer dan Jaringan"),
    ("RPL", "Rekayasa Perangkat Lunak"),
    ("MM", "Multimedia"),
    ("AKL", "Akuntansi dan Keuangan Lembaga"),
    ("OTKP", "Otomatisasi Tata Kelola Perkantoran"),
];

/// Oldest first; the last one ends up active.
const PERIODE: [&str; 3] = ["2024/2025 Ganjil", "2024/2025 Genap", "2025/2026 Ganjil"];

const SCHOOL_NAME: &str = "SMKN 1 Gorontalo";

/// Counts of records created by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub jurusan: usize,
    pub kriteria: usize,
    pub users: usize,
    pub periode: usize,
}

pub struct SeedDemoDataHandler {
    jurusan: Arc<dyn JurusanRepository>,
    kriteria: Arc<dyn KriteriaRepository>,
    users: Arc<dyn UserRepository>,
    periode: Arc<dyn PeriodeRepository>,
    settings: Arc<dyn SettingsRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SeedDemoDataHandler {
    pub fn new(
        jurusan: Arc<dyn JurusanRepository>,
        kriteria: Arc<dyn KriteriaRepository>,
        users: Arc<dyn UserRepository>,
        periode: Arc<dyn PeriodeRepository>,
        settings: Arc<dyn SettingsRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            jurusan,
            kriteria,
            users,
            periode,
            settings,
            hasher,
        }
    }

    pub async fn handle(&self) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();

        let tkj = self.seed_jurusan(&mut report).await?;
        self.seed_kriteria(&mut report).await?;
        let siswa = self.seed_users(tkj, &mut report).await?;
        let active = self.seed_periode(&mut report).await?;

        for user in &siswa {
            if let Some(kelas) = user.kelas_saat_ini.filter(|k| *k != KelasLevel::Alumni) {
                self.periode
                    .upsert_riwayat(&RiwayatKelas::aktif(user.id, active.id, kelas, user.jurusan_id))
                    .await?;
            }
        }

        let stored = self.settings.all().await?;
        if !stored.contains_key("nama_sekolah") {
            let entries: BTreeMap<String, String> =
                [("nama_sekolah".to_string(), SCHOOL_NAME.to_string())]
                    .into_iter()
                    .collect();
            self.settings.set_many(&entries).await?;
        }

        tracing::info!(
            jurusan = report.jurusan,
            kriteria = report.kriteria,
            users = report.users,
            periode = report.periode,
            "demo data seeded"
        );
        Ok(report)
    }

    async fn seed_jurusan(&self, report: &mut SeedReport) -> Result<Option<JurusanId>, DomainError> {
        let existing = self.jurusan.list().await?;
        let mut tkj = existing
            .iter()
            .find(|j| j.kode_jurusan == "TKJ")
            .map(|j| j.id);
        for (kode, nama) in JURUSAN {
            if existing.iter().any(|j| j.kode_jurusan == kode) {
                continue;
            }
            let created = self
                .jurusan
                .create(JurusanDraft {
                    kode_jurusan: kode.to_string(),
                    nama_jurusan: nama.to_string(),
                })
                .await?;
            if kode == "TKJ" {
                tkj = Some(created.id);
            }
            report.jurusan += 1;
        }
        Ok(tkj)
    }

    async fn seed_kriteria(&self, report: &mut SeedReport) -> Result<(), DomainError> {
        let existing = self.kriteria.list().await?;
        for draft in demo_kriteria() {
            if existing.iter().any(|k| k.kode == draft.kode) {
                continue;
            }
            self.kriteria.create(draft.validate()?).await?;
            report.kriteria += 1;
        }
        Ok(())
    }

    /// Returns the student accounts, created or not.
    async fn seed_users(
        &self,
        tkj: Option<JurusanId>,
        report: &mut SeedReport,
    ) -> Result<Vec<User>, DomainError> {
        let mut siswa = Vec::new();
        for user in demo_users(tkj) {
            let account = match self.users.find_credentials(&user.username).await? {
                Some(found) => found.user,
                None => {
                    let password = match user.role {
                        Role::Siswa => DEFAULT_SISWA_PASSWORD,
                        _ => DEFAULT_PAKAR_PASSWORD,
                    };
                    let hash = self.hasher.hash(password).await?;
                    report.users += 1;
                    self.users.create(user, hash).await?
                }
            };
            if account.role == Role::Siswa {
                siswa.push(account);
            }
        }
        Ok(siswa)
    }

    /// Creates the periods and activates the latest one when none is active.
    async fn seed_periode(&self, report: &mut SeedReport) -> Result<Periode, DomainError> {
        let existing: Vec<Periode> = self
            .periode
            .list()
            .await?
            .into_iter()
            .map(|s| s.periode)
            .collect();

        let mut latest = None;
        let mut known = existing.clone();
        for nama in PERIODE {
            let periode = match existing.iter().find(|p| p.nama_periode == nama) {
                Some(found) => found.clone(),
                None => {
                    let created = self
                        .periode
                        .create(nama, Periode::next_urutan(&known))
                        .await?;
                    known.push(created.clone());
                    report.periode += 1;
                    created
                }
            };
            latest = Some(periode);
        }

        if let Some(active) = self.periode.active().await? {
            return Ok(active);
        }
        let latest = latest.ok_or_else(|| DomainError::not_found("Periode tidak ditemukan"))?;
        self.periode
            .activate(latest.id, None, &PeriodPromotion::default())
            .await?;
        Ok(Periode {
            is_active: true,
            ..latest
        })
    }
}

fn likert(kode: &str, nama: &str, pertanyaan: &str, target: &[Jalur]) -> KriteriaDraft {
    KriteriaDraft {
        kode: kode.to_string(),
        nama: nama.to_string(),
        pertanyaan: Some(pertanyaan.to_string()),
        tipe_input: TipeInputKind::Likert,
        opsi_pilihan: None,
        atribut: Atribut::Benefit,
        kategori: Kategori::Kuesioner,
        sumber_nilai: SumberNilai::InputSiswa,
        tampil_di_siswa: true,
        penanggung_jawab: PenanggungJawab::Gurubk,
        skala_maks: 5.0,
        target_jalur: JalurSet::of(target),
        jalur_reverse: JalurSet::EMPTY,
    }
}

/// Criteria C1 to C8 of the demonstration questionnaire.
fn demo_kriteria() -> Vec<KriteriaDraft> {
    let ekonomi = vec![
        OpsiPilihan::new(1, "Kurang Mampu (< 1 Juta)"),
        OpsiPilihan::new(2, "Cukup (1 - 3 Juta)"),
        OpsiPilihan::new(3, "Sedang (3 - 5 Juta)"),
        OpsiPilihan::new(4, "Mampu (5 - 10 Juta)"),
        OpsiPilihan::new(5, "Sangat Mampu (> 10 Juta)"),
    ];

    let nilai_akademik = KriteriaDraft {
        kode: "C1".to_string(),
        nama: "Nilai Akademik".to_string(),
        pertanyaan: Some("Masukkan nilai rata-rata rapor Anda (Skala 0-100).".to_string()),
        tipe_input: TipeInputKind::Number,
        opsi_pilihan: None,
        atribut: Atribut::Benefit,
        kategori: Kategori::Akademik,
        sumber_nilai: SumberNilai::InputSiswa,
        tampil_di_siswa: true,
        penanggung_jawab: PenanggungJawab::Umum,
        skala_maks: 100.0,
        target_jalur: JalurSet::ALL,
        jalur_reverse: JalurSet::EMPTY,
    };
    let ekonomi = KriteriaDraft {
        kode: "C4".to_string(),
        nama: "Kondisi Ekonomi".to_string(),
        pertanyaan: Some("Pilih rentang penghasilan orang tua per bulan.".to_string()),
        tipe_input: TipeInputKind::Select,
        opsi_pilihan: Some(ekonomi),
        skala_maks: 5.0,
        ..nilai_akademik.clone()
    };
    let lapangan_kerja = KriteriaDraft {
        kode: "C6".to_string(),
        nama: "Ketersediaan Lapangan Kerja".to_string(),
        pertanyaan: None,
        sumber_nilai: SumberNilai::StaticJurusan,
        tampil_di_siswa: false,
        penanggung_jawab: PenanggungJawab::Kaprodi,
        skala_maks: 5.0,
        target_jalur: JalurSet::of(&[Jalur::Kerja]),
        ..nilai_akademik.clone()
    };

    vec![
        nilai_akademik,
        likert(
            "C2",
            "Minat Lanjut Studi",
            "Seberapa besar keinginan dan rencana Anda untuk melanjutkan pendidikan ke Perguruan Tinggi (Kuliah)?",
            &[Jalur::Studi],
        ),
        likert(
            "C3",
            "Minat Lanjut Kerja",
            "Seberapa siap Anda secara mental dan skill untuk langsung bekerja di dunia industri setelah lulus?",
            &[Jalur::Kerja],
        ),
        ekonomi,
        likert(
            "C5",
            "Motivasi & Dukungan Ortu",
            "Seberapa besar dukungan orang tua dan motivasi diri Anda terhadap pilihan karir yang akan diambil?",
            &Jalur::ALL,
        ),
        lapangan_kerja,
        likert(
            "C7",
            "Minat Wirausaha",
            "Seberapa besar ketertarikan Anda untuk memulai dan mengelola bisnis/usaha sendiri?",
            &[Jalur::Wirausaha],
        ),
        likert(
            "C8",
            "Ketersediaan Modal/Aset",
            "Seberapa siap ketersediaan modal atau aset awal (tempat/alat) jika Anda memutuskan untuk berwirausaha?",
            &[Jalur::Wirausaha],
        ),
    ]
}

fn demo_users(tkj: Option<JurusanId>) -> Vec<NewUser> {
    let base = NewUser {
        name: String::new(),
        username: String::new(),
        email: None,
        nisn: None,
        role: Role::Admin,
        jenis_pakar: None,
        jurusan_id: None,
        kelas_saat_ini: None,
    };
    vec![
        NewUser {
            name: "Administrator Sistem".to_string(),
            username: "admin".to_string(),
            email: Some("admin@smk.id".to_string()),
            ..base.clone()
        },
        NewUser {
            name: "Ibu Guru BK".to_string(),
            username: "gurubk".to_string(),
            email: Some("gurubk@smk.id".to_string()),
            role: Role::Pakar,
            jenis_pakar: Some(JenisPakar::Gurubk),
            ..base.clone()
        },
        NewUser {
            name: "Bapak Kaprodi TKJ".to_string(),
            username: "kaprodi".to_string(),
            email: Some("kaprodi@smk.id".to_string()),
            role: Role::Pakar,
            jenis_pakar: Some(JenisPakar::Kaprodi),
            jurusan_id: tkj,
            ..base.clone()
        },
        NewUser {
            name: "Alim Suma".to_string(),
            username: "siswa12".to_string(),
            email: Some("alim@smk.id".to_string()),
            nisn: Some("531422058".to_string()),
            role: Role::Siswa,
            jurusan_id: tkj,
            kelas_saat_ini: Some(KelasLevel::DuaBelas),
            ..base.clone()
        },
        NewUser {
            name: "Budi Santoso".to_string(),
            username: "siswa10".to_string(),
            email: Some("budi@smk.id".to_string()),
            nisn: Some("123456789".to_string()),
            role: Role::Siswa,
            jurusan_id: tkj,
            kelas_saat_ini: Some(KelasLevel::Sepuluh),
            ..base
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockPasswordHasher;
    use crate::adapters::memory::InMemoryStore;

    fn handler(store: &Arc<InMemoryStore>) -> SeedDemoDataHandler {
        SeedDemoDataHandler::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(MockPasswordHasher),
        )
    }

    #[test]
    fn demo_criteria_are_valid() {
        let drafts = demo_kriteria();
        assert_eq!(drafts.len(), 8);
        for draft in drafts {
            assert!(draft.validate().is_ok());
        }
    }

    #[tokio::test]
    async fn seeds_the_demo_school() {
        let store = Arc::new(InMemoryStore::new());
        let report = handler(&store).handle().await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                jurusan: 5,
                kriteria: 8,
                users: 5,
                periode: 3
            }
        );
        let active = PeriodeRepository::active(store.as_ref()).await.unwrap().unwrap();
        assert_eq!(active.nama_periode, "2025/2026 Ganjil");
        assert_eq!(store.riwayat_in(active.id).await.unwrap().len(), 2);
        let settings = store.all().await.unwrap();
        assert_eq!(settings.get("nama_sekolah").map(String::as_str), Some(SCHOOL_NAME));
    }

    #[tokio::test]
    async fn second_run_creates_nothing() {
        let store = Arc::new(InMemoryStore::new());
        handler(&store).handle().await.unwrap();
        let again = handler(&store).handle().await.unwrap();
        assert_eq!(again, SeedReport::default());
    }
}
