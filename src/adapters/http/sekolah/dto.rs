//! Wire shapes for school data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::sekolah::{StaticValueRow, StaticValues};
use crate::domain::sekolah::Jurusan;

#[derive(Debug, Clone, Serialize)]
pub struct JurusanListResponse {
    pub data: Vec<Jurusan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticValuesRequest {
    /// Value per criterion code.
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StaticValuesResponse {
    pub jurusan: Jurusan,
    pub data: Vec<StaticValueRow>,
}

impl From<StaticValues> for StaticValuesResponse {
    fn from(values: StaticValues) -> Self {
        Self {
            jurusan: values.jurusan,
            data: values.rows,
        }
    }
}
