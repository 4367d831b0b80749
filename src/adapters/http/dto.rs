//! Response shapes shared by several endpoint groups.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{JurusanId, Page, PageMeta};
use crate::domain::periode::KelasLevel;

/// `{msg}` acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// `{msg, data}` acknowledgement carrying the affected record.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub msg: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(msg: impl Into<String>, data: T) -> Self {
        Self {
            msg: msg.into(),
            data,
        }
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PagedResponse<T> {
    pub fn from_page<U>(page: Page<U>, f: impl FnMut(U) -> T) -> Self {
        let page = page.map(f);
        Self {
            data: page.items,
            meta: page.meta,
        }
    }
}

/// `?search=&page=` on list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<u32>,
}

/// Query-string field where an empty value means "no filter".
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// `?search=&jurusan_id=&kelas=&page=` on student lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilterParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub jurusan_id: Option<JurusanId>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub kelas: Option<KelasLevel>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &'static str) -> StudentFilterParams {
        let uri: Uri = uri.parse().unwrap();
        Query::<StudentFilterParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn blank_filters_are_ignored() {
        let params = parse("/monitoring?search=&jurusan_id=&kelas=&page=");
        assert!(params.jurusan_id.is_none());
        assert!(params.kelas.is_none());
        assert!(params.page.is_none());
    }

    #[test]
    fn filters_parse_from_query_text() {
        let params = parse("/monitoring?jurusan_id=3&kelas=12&page=2");
        assert_eq!(params.jurusan_id, Some(JurusanId::new(3)));
        assert_eq!(params.kelas, Some(KelasLevel::DuaBelas));
        assert_eq!(params.page, Some(2));
    }
}
