//! School-wide key/value settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::bwm::BwmReference;
use crate::domain::foundation::{DomainError, KriteriaId};

/// Keys an admin may edit from the settings screen.
pub const EDITABLE_KEYS: [&str; 4] = ["nama_sekolah", "timezone", "periode_bulan", "periode_tanggal"];

/// Key of the locked best criterion.
pub const BWM_BEST_KEY: &str = "bwm_best_id";
/// Key of the locked worst criterion.
pub const BWM_WORST_KEY: &str = "bwm_worst_id";

/// Editable settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolSettings {
    pub nama_sekolah: String,
    pub timezone: String,
    pub periode_bulan: String,
    pub periode_tanggal: String,
}

impl SchoolSettings {
    pub fn from_stored(stored: &BTreeMap<String, String>) -> Self {
        let get = |key: &str, default: &str| {
            stored
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            nama_sekolah: get("nama_sekolah", ""),
            timezone: get("timezone", "Asia/Jakarta"),
            periode_bulan: get("periode_bulan", "7"),
            periode_tanggal: get("periode_tanggal", "1"),
        }
    }
}

/// Keeps only editable keys and checks numeric ones.
pub fn validate_settings_update(
    input: BTreeMap<String, serde_json::Value>,
) -> Result<BTreeMap<String, String>, DomainError> {
    let mut accepted = BTreeMap::new();
    for (key, value) in input {
        if !EDITABLE_KEYS.contains(&key.as_str()) {
            continue;
        }
        let text = match value {
            serde_json::Value::String(s) => s.trim().to_string(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        let bounds = match key.as_str() {
            "periode_bulan" => Some(1..=12),
            "periode_tanggal" => Some(1..=31),
            _ => None,
        };
        if let Some(bounds) = bounds {
            let ok = text.parse::<u32>().is_ok_and(|n| bounds.contains(&n));
            if !ok {
                return Err(DomainError::validation(key, format!("Nilai {} tidak valid", text)));
            }
        }
        accepted.insert(key, text);
    }
    Ok(accepted)
}

/// The locked BWM reference, if both keys are stored and parse.
pub fn bwm_reference(stored: &BTreeMap<String, String>) -> Option<BwmReference> {
    let parse = |key: &str| stored.get(key)?.parse::<KriteriaId>().ok();
    BwmReference::new(parse(BWM_BEST_KEY)?, parse(BWM_WORST_KEY)?).ok()
}
