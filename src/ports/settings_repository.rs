//! Key/value settings port.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Every stored key. Defaults are applied by the caller.
    async fn all(&self) -> Result<BTreeMap<String, String>, DomainError>;

    /// Upsert each entry.
    async fn set_many(&self, entries: &BTreeMap<String, String>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SettingsRepository>();
    }
}
