//! School data endpoints.
//!
//! - `GET/POST /settings` - school profile and thresholds
//! - `GET/POST /jurusan`, `PUT/DELETE /jurusan/{id}` - majors
//! - `GET/POST /jurusan/{id}/static-values` - per-major criterion values
//! - `GET/POST /alumni`, `PUT/DELETE /alumni/{id}` - graduate records

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::sekolah_routes;
