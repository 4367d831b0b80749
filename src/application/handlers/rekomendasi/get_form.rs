//! GetFormHandler - questionnaire fields with the student's last answers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::rekomendasi::{form_fields, FormField};
use crate::ports::{KriteriaRepository, NilaiSiswaRepository};

#[derive(Debug, Clone, Copy)]
pub struct GetFormQuery {
    pub siswa_id: UserId,
}

pub struct GetFormHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    nilai: Arc<dyn NilaiSiswaRepository>,
}

impl GetFormHandler {
    pub fn new(kriteria: Arc<dyn KriteriaRepository>, nilai: Arc<dyn NilaiSiswaRepository>) -> Self {
        Self { kriteria, nilai }
    }

    pub async fn handle(&self, query: GetFormQuery) -> Result<Vec<FormField>, DomainError> {
        let kriteria = self.kriteria.list().await?;
        let answers = self.nilai.values_for(query.siswa_id).await?;
        Ok(form_fields(&kriteria, &answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::kriteria::{Atribut, TipeInputKind};
    use crate::domain::periode::KelasLevel;
    use crate::domain::rekomendasi::NilaiSiswa;

    #[tokio::test]
    async fn hides_static_criteria_and_fills_previous_answers() {
        let fx = Fixture::new();
        let c1 = fx.kriteria("C1", TipeInputKind::Likert, Atribut::Benefit).await;
        fx.static_kriteria("C2").await;
        let siswa = fx.siswa("siswa12", KelasLevel::DuaBelas, None).await;
        NilaiSiswaRepository::upsert(
            fx.store.as_ref(),
            &[NilaiSiswa {
                siswa_id: siswa.id,
                kriteria_id: c1.id,
                nilai_input: 4.0,
            }],
        )
        .await
        .unwrap();

        let fields = GetFormHandler::new(fx.store.clone(), fx.store.clone())
            .handle(GetFormQuery { siswa_id: siswa.id })
            .await
            .unwrap();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].kode, "C1");
        assert_eq!(fields[0].value, Some(4.0));
    }
}
