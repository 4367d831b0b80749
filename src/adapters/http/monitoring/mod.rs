//! Counsellor monitoring endpoints (admin/pakar).
//!
//! - `GET /monitoring` - students with their current result
//! - `POST /monitoring/{id}/catatan` - counsellor note on a result

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::monitoring_routes;
