//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! feature folder holds one handler per use case; handlers take their ports
//! as `Arc<dyn Port>` and return `Result<_, DomainError>`.

pub mod auth;
pub mod bwm;
pub mod dashboard;
pub mod kriteria;
pub mod monitoring;
pub mod periode;
pub mod promotion;
pub mod rekomendasi;
pub mod sekolah;
pub mod seed;
pub mod simulation;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
