//! Student questionnaire and recommendation endpoints.
//!
//! - `GET /siswa/form` - questions with previous answers
//! - `POST /siswa/save` - store answers
//! - `GET /moora/result?id=` - current recommendation or a past snapshot

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::HasilResponse;
pub use routes::rekomendasi_routes;
