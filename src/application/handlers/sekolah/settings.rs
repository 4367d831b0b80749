//! School settings.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::sekolah::{validate_settings_update, SchoolSettings};
use crate::ports::SettingsRepository;

pub struct GetSettingsHandler {
    repo: Arc<dyn SettingsRepository>,
}

impl GetSettingsHandler {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    pub async fn handle(&self) -> Result<SchoolSettings, DomainError> {
        Ok(SchoolSettings::from_stored(&self.repo.all().await?))
    }
}

pub struct UpdateSettingsHandler {
    repo: Arc<dyn SettingsRepository>,
}

impl UpdateSettingsHandler {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Unknown keys are ignored; the BWM reference has its own endpoint.
    pub async fn handle(
        &self,
        input: BTreeMap<String, serde_json::Value>,
    ) -> Result<SchoolSettings, DomainError> {
        let accepted = validate_settings_update(input)?;
        if !accepted.is_empty() {
            self.repo.set_many(&accepted).await?;
            tracing::info!(keys = ?accepted.keys().collect::<Vec<_>>(), "settings updated");
        }
        Ok(SchoolSettings::from_stored(&self.repo.all().await?))
    }
}
