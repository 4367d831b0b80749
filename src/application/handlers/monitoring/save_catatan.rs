//! SaveCatatanHandler - counsellor note on a result.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, HasilId};
use crate::ports::HasilRepository;

#[derive(Debug, Clone)]
pub struct SaveCatatanCommand {
    pub hasil_id: HasilId,
    /// Blank clears the note.
    pub catatan: Option<String>,
}

pub struct SaveCatatanHandler {
    hasil: Arc<dyn HasilRepository>,
}

impl SaveCatatanHandler {
    pub fn new(hasil: Arc<dyn HasilRepository>) -> Self {
        Self { hasil }
    }

    pub async fn handle(&self, cmd: SaveCatatanCommand) -> Result<Option<String>, DomainError> {
        let catatan = cmd
            .catatan
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if !self.hasil.set_catatan(cmd.hasil_id, catatan.clone()).await? {
            return Err(DomainError::not_found("Hasil tidak ditemukan"));
        }
        Ok(catatan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::UserId;
    use crate::domain::kriteria::Jalur;
    use crate::domain::moora::SkorJalur;
    use crate::domain::rekomendasi::HasilDraft;

    #[tokio::test]
    async fn stores_trimmed_note_and_clears_blank() {
        let fx = Fixture::new();
        let hasil = HasilRepository::upsert(
            fx.store.as_ref(),
            HasilDraft {
                siswa_id: UserId::new(1),
                periode_id: None,
                tingkat_kelas: None,
                skor: SkorJalur::from_scores([0.1, 0.3, 0.2]),
                keputusan: Jalur::Kerja,
                riwayat_jawaban: Vec::new(),
            },
        )
        .await
        .unwrap();
        let handler = SaveCatatanHandler::new(fx.store.clone());

        let saved = handler
            .handle(SaveCatatanCommand {
                hasil_id: hasil.id,
                catatan: Some("  Konsultasi lanjutan ".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(saved.as_deref(), Some("Konsultasi lanjutan"));

        let cleared = handler
            .handle(SaveCatatanCommand {
                hasil_id: hasil.id,
                catatan: Some("   ".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(cleared, None);
        let stored = HasilRepository::find(fx.store.as_ref(), hasil.id).await.unwrap();
        assert_eq!(stored.unwrap().catatan, None);
    }

    #[tokio::test]
    async fn missing_result_is_not_found() {
        let fx = Fixture::new();
        let err = SaveCatatanHandler::new(fx.store.clone())
            .handle(SaveCatatanCommand {
                hasil_id: HasilId::new(9),
                catatan: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Hasil tidak ditemukan");
    }
}
