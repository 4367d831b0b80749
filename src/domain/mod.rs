//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, errors, auth, pagination)
//! - `kriteria` - Criterion definitions, input types and pathway targeting
//! - `bwm` - Best-Worst Method comparisons, solver and weight aggregation
//! - `moora` - Decision matrix and pathway ranking
//! - `rekomendasi` - Student answers, questionnaire form and stored results
//! - `periode` - Academic periods, class history and grade promotion
//! - `users` - Student and expert accounts
//! - `sekolah` - Majors, alumni and school settings

pub mod bwm;
pub mod foundation;
pub mod kriteria;
pub mod moora;
pub mod periode;
pub mod rekomendasi;
pub mod sekolah;
pub mod users;
