//! SaveAnswersHandler - stores a questionnaire submission.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, KriteriaId, UserId};
use crate::domain::rekomendasi::validate_answers;
use crate::ports::{KriteriaRepository, NilaiSiswaRepository};

#[derive(Debug, Clone)]
pub struct SaveAnswersCommand {
    pub siswa_id: UserId,
    pub values: BTreeMap<KriteriaId, f64>,
}

pub struct SaveAnswersHandler {
    kriteria: Arc<dyn KriteriaRepository>,
    nilai: Arc<dyn NilaiSiswaRepository>,
}

impl SaveAnswersHandler {
    pub fn new(kriteria: Arc<dyn KriteriaRepository>, nilai: Arc<dyn NilaiSiswaRepository>) -> Self {
        Self { kriteria, nilai }
    }

    /// Returns the number of answers stored.
    pub async fn handle(&self, cmd: SaveAnswersCommand) -> Result<usize, DomainError> {
        let kriteria = self.kriteria.list().await?;
        let answers = validate_answers(cmd.siswa_id, &kriteria, &cmd.values)?;
        self.nilai.upsert(&answers).await?;

        tracing::debug!(siswa_id = %cmd.siswa_id, count = answers.len(), "answers saved");
        Ok(answers.len())
    }
}
