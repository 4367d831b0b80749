//! HTTP adapter - the REST API over axum.
//!
//! One folder per area with `dto`, `handlers` and `routes`; `router`
//! merges them behind the token middleware.

pub mod auth;
pub mod bwm;
pub mod dashboard;
pub mod dto;
pub mod error;
pub mod kriteria;
pub mod middleware;
pub mod monitoring;
pub mod periode;
pub mod rekomendasi;
pub mod router;
pub mod sekolah;
pub mod simulation;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiJson, ErrorResponse};
pub use router::api_router;
pub use state::AppState;
