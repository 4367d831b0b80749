//! Wire shapes for account administration.

use serde::Deserialize;

use crate::domain::users::{PakarDraft, SiswaDraft};

/// Student form. A blank password keeps the current one on update and
/// falls back to the default on create.
#[derive(Debug, Clone, Deserialize)]
pub struct SiswaRequest {
    #[serde(flatten)]
    pub draft: SiswaDraft,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PakarRequest {
    #[serde(flatten)]
    pub draft: PakarDraft,
    #[serde(default)]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::periode::KelasLevel;

    #[test]
    fn siswa_form_carries_grade_and_password() {
        let req: SiswaRequest = serde_json::from_str(
            r#"{"name":"Budi","username":"budi","nisn":"0012","kelas":"11","password":"rahasia1"}"#,
        )
        .unwrap();
        assert_eq!(req.draft.kelas, Some(KelasLevel::Sebelas));
        assert_eq!(req.password.as_deref(), Some("rahasia1"));
    }
}
