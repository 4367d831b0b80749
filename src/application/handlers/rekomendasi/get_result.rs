//! GetResultHandler - recomputes or loads a student's recommendation.
//!
//! A student enrolled in the active period always gets a fresh ranking,
//! stored as that period's snapshot. Everyone else sees their latest
//! snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::bwm::aggregate_weights;
use crate::domain::foundation::{DomainError, HasilId, JurusanId, KriteriaId, UserId};
use crate::domain::kriteria::{natural_sort_by_kode, Kriteria};
use crate::domain::moora::MooraAnalyzer;
use crate::domain::periode::{Periode, RiwayatKelas};
use crate::domain::rekomendasi::{
    missing_static_values, HasilDraft, HasilRekomendasi, JawabanSnapshot, NilaiSiswa,
};
use crate::domain::sekolah::Alumni;
use crate::ports::{
    AlumniRepository, BwmRepository, HasilRepository, JurusanRepository, KriteriaRepository,
    NilaiSiswaRepository, PeriodeRepository, UserRepository,
};

#[derive(Debug, Clone, Copy)]
pub struct GetResultQuery {
    pub siswa_id: UserId,
    /// A specific past snapshot; `None` means the current one.
    pub hasil_id: Option<HasilId>,
}

#[derive(Debug, Clone)]
pub struct ResultView {
    pub hasil: HasilRekomendasi,
    pub alumni: Vec<Alumni>,
    pub periode: Option<Periode>,
}

pub struct GetResultHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    bwm: Arc<dyn BwmRepository>,
    nilai: Arc<dyn NilaiSiswaRepository>,
    hasil: Arc<dyn HasilRepository>,
    periode: Arc<dyn PeriodeRepository>,
    users: Arc<dyn UserRepository>,
    jurusan: Arc<dyn JurusanRepository>,
    alumni: Arc<dyn AlumniRepository>,
    alumni_limit: u32,
}

impl GetResultHandler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kriteria: Arc<dyn KriteriaRepository>,
        bwm: Arc<dyn BwmRepository>,
        nilai: Arc<dyn NilaiSiswaRepository>,
        hasil: Arc<dyn HasilRepository>,
        periode: Arc<dyn PeriodeRepository>,
        users: Arc<dyn UserRepository>,
        jurusan: Arc<dyn JurusanRepository>,
        alumni: Arc<dyn AlumniRepository>,
        alumni_limit: u32,
    ) -> Self {
        Self {
            kriteria,
            bwm,
            nilai,
            hasil,
            periode,
            users,
            jurusan,
            alumni,
            alumni_limit,
        }
    }

    pub async fn handle(&self, query: GetResultQuery) -> Result<ResultView, DomainError> {
        let siswa = self
            .users
            .find(query.siswa_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Siswa tidak ditemukan"))?;

        // 1. Resolve the snapshot to show
        let (hasil, jurusan_id) = match query.hasil_id {
            Some(id) => {
                let hasil = self
                    .hasil
                    .find(id)
                    .await?
                    .filter(|h| h.siswa_id == siswa.id)
                    .ok_or_else(|| DomainError::not_found("Riwayat tidak ditemukan"))?;
                (hasil, siswa.jurusan_id)
            }
            None => match self.active_enrolment(siswa.id).await? {
                Some(riwayat) => {
                    let jurusan_id = riwayat.jurusan_id.or(siswa.jurusan_id);
                    (self.recompute(&riwayat, jurusan_id).await?, jurusan_id)
                }
                None => {
                    let hasil = self
                        .hasil
                        .latest_for_siswa(siswa.id)
                        .await?
                        .ok_or_else(|| DomainError::not_found("Belum ada data hasil penilaian."))?;
                    (hasil, siswa.jurusan_id)
                }
            },
        };

        // 2. Alumni who took the same path from the same major
        let alumni = match jurusan_id {
            Some(id) => match self.jurusan.find(id).await? {
                Some(jurusan) => {
                    self.alumni
                        .relevant(&jurusan.nama_jurusan, hasil.keputusan, self.alumni_limit)
                        .await?
                }
                None => Vec::new(),
            },
            None => Vec::new(),
        };

        // 3. Period the snapshot belongs to
        let periode = match hasil.periode_id {
            Some(id) => self.periode.find(id).await?,
            None => None,
        };

        Ok(ResultView {
            hasil,
            alumni,
            periode,
        })
    }

    async fn active_enrolment(&self, siswa_id: UserId) -> Result<Option<RiwayatKelas>, DomainError> {
        let Some(active) = self.periode.active().await? else {
            return Ok(None);
        };
        Ok(self
            .periode
            .riwayat(siswa_id, active.id)
            .await?
            .filter(RiwayatKelas::is_aktif))
    }

    async fn recompute(
        &self,
        riwayat: &RiwayatKelas,
        jurusan_id: Option<JurusanId>,
    ) -> Result<HasilRekomendasi, DomainError> {
        let siswa_id = riwayat.siswa_id;
        let mut kriteria = self.kriteria.list().await?;
        natural_sort_by_kode(&mut kriteria, |k| k.kode.as_str());

        let mut values = self.nilai.values_for(siswa_id).await?;
        if !answered_questionnaire(&kriteria, &values) {
            return Err(DomainError::not_found(
                "Belum ada data penilaian. Silakan isi kuesioner terlebih dahulu.",
            ));
        }

        // Static criteria come from the major and never overwrite answers.
        let jurusan_values: HashMap<KriteriaId, f64> = match jurusan_id {
            Some(id) => self
                .jurusan
                .static_values(id)
                .await?
                .into_iter()
                .map(|v| (v.kriteria_id, v.nilai))
                .collect(),
            None => HashMap::new(),
        };
        let filled = missing_static_values(&kriteria, &values, &jurusan_values);
        if !filled.is_empty() {
            let rows: Vec<NilaiSiswa> = filled
                .iter()
                .map(|(kriteria_id, nilai_input)| NilaiSiswa {
                    siswa_id,
                    kriteria_id: *kriteria_id,
                    nilai_input: *nilai_input,
                })
                .collect();
            self.nilai.upsert(&rows).await?;
            values.extend(filled);
        }

        let ids: Vec<KriteriaId> = kriteria.iter().map(|k| k.id).collect();
        let weights = aggregate_weights(&ids, &self.bwm.all_weights().await?);
        let outcome = MooraAnalyzer::rank_jalur(&kriteria, &values, &weights);

        let draft = HasilDraft::from_outcome(
            siswa_id,
            Some(riwayat.periode_id),
            Some(riwayat.tingkat_kelas),
            outcome,
            JawabanSnapshot::capture(&kriteria, &values),
        );
        let hasil = self.hasil.upsert(draft).await?;

        tracing::info!(
            siswa_id = %siswa_id,
            periode_id = %riwayat.periode_id,
            keputusan = %hasil.keputusan,
            "recommendation recomputed"
        );
        Ok(hasil)
    }
}

fn answered_questionnaire(kriteria: &[Kriteria], values: &HashMap<KriteriaId, f64>) -> bool {
    kriteria
        .iter()
        .any(|k| !k.is_static() && values.contains_key(&k.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::kriteria::{Atribut, Jalur, TipeInputKind};
    use crate::domain::periode::KelasLevel;
    use crate::domain::sekolah::AlumniDraft;

    fn handler(fx: &Fixture) -> GetResultHandler {
        let s = fx.store.clone();
        GetResultHandler::new(
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s.clone(),
            s,
            5,
        )
    }

    async fn answer(fx: &Fixture, siswa: UserId, kriteria: KriteriaId, value: f64) {
        NilaiSiswaRepository::upsert(
            fx.store.as_ref(),
            &[NilaiSiswa {
                siswa_id: siswa,
                kriteria_id: kriteria,
                nilai_input: value,
            }],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn enrolled_student_without_answers_is_told_to_fill_the_form() {
        let fx = Fixture::new();
        fx.kriteria("C1", TipeInputKind::Likert, Atribut::Benefit).await;
        let periode = fx.periode("2025/2026", 1, true).await;
        let siswa = fx.siswa("siswa12", KelasLevel::DuaBelas, None).await;
        fx.enrol(&siswa, &periode, KelasLevel::DuaBelas).await;

        let err = handler(&fx)
            .handle(GetResultQuery {
                siswa_id: siswa.id,
                hasil_id: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.starts_with("Belum ada data penilaian"));
    }

    #[tokio::test]
    async fn recomputes_and_fills_static_values() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Likert, Atribut::Benefit).await;
        let c2 = fx.static_kriteria("C2").await;
        let tkj = fx.jurusan("TKJ", "Teknik Komputer").await;
        let periode = fx.periode("2025/2026", 1, true).await;
        let siswa = fx.siswa("siswa12", KelasLevel::DuaBelas, Some(tkj.id)).await;
        fx.enrol(&siswa, &periode, KelasLevel::DuaBelas).await;
        answer(&fx, siswa.id, c1.id, 4.0).await;
        AlumniRepository::create(
            fx.store.as_ref(),
            AlumniDraft {
                name: "Rina".to_string(),
                status: Jalur::Studi.alumni_keyword().to_string(),
                batch: 2023,
                major: "Teknik Komputer".to_string(),
            },
        )
        .await
        .unwrap();

        let view = handler(&fx)
            .handle(GetResultQuery {
                siswa_id: siswa.id,
                hasil_id: None,
            })
            .await
            .unwrap();

        assert_eq!(view.hasil.periode_id, Some(periode.id));
        assert_eq!(view.hasil.tingkat_kelas, Some(KelasLevel::DuaBelas));
        assert_eq!(view.periode.map(|p| p.id), Some(periode.id));
        assert_eq!(view.hasil.riwayat_jawaban.len(), 2);
        let stored = fx.store.values_for(siswa.id).await.unwrap();
        assert_eq!(stored.get(&c2.id), Some(&3.0));
        if view.hasil.keputusan == Jalur::Studi {
            assert_eq!(view.alumni.len(), 1);
        }
    }

    #[tokio::test]
    async fn recomputing_twice_keeps_one_snapshot() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Likert, Atribut::Benefit).await;
        let periode = fx.periode("2025/2026", 1, true).await;
        let siswa = fx.siswa("siswa12", KelasLevel::DuaBelas, None).await;
        fx.enrol(&siswa, &periode, KelasLevel::DuaBelas).await;
        answer(&fx, siswa.id, c1.id, 4.0).await;

        let query = GetResultQuery {
            siswa_id: siswa.id,
            hasil_id: None,
        };
        let first = handler(&fx).handle(query).await.unwrap();
        let second = handler(&fx).handle(query).await.unwrap();

        assert_eq!(first.hasil.id, second.hasil.id);
        assert_eq!(fx.store.history(siswa.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unenrolled_student_without_history_gets_not_found() {
        let fx = Fixture::new();
        let siswa = fx.siswa("siswa10", KelasLevel::Sepuluh, None).await;

        let err = handler(&fx)
            .handle(GetResultQuery {
                siswa_id: siswa.id,
                hasil_id: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.message, "Belum ada data hasil penilaian.");
    }

    #[tokio::test]
    async fn foreign_snapshot_is_hidden() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Likert, Atribut::Benefit).await;
        let periode = fx.periode("2025/2026", 1, true).await;
        let owner = fx.siswa("siswa12", KelasLevel::DuaBelas, None).await;
        let other = fx.siswa("siswa10", KelasLevel::Sepuluh, None).await;
        fx.enrol(&owner, &periode, KelasLevel::DuaBelas).await;
        answer(&fx, owner.id, c1.id, 4.0).await;
        let view = handler(&fx)
            .handle(GetResultQuery {
                siswa_id: owner.id,
                hasil_id: None,
            })
            .await
            .unwrap();

        let err = handler(&fx)
            .handle(GetResultQuery {
                siswa_id: other.id,
                hasil_id: Some(view.hasil.id),
            })
            .await
            .unwrap_err();

        assert_eq!(err.message, "Riwayat tidak ditemukan");
    }
}
