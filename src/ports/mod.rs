//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `KriteriaRepository` - Criterion definitions
//! - `BwmRepository` - Expert comparison sets and derived weights
//! - `SettingsRepository` - School-wide key/value settings
//! - `PeriodeRepository` - Academic periods and class history
//! - `UserRepository` - Accounts and the yearly grade promotion
//! - `JurusanRepository` - Majors and their static criterion values
//! - `AlumniRepository` - Alumni role models
//! - `NilaiSiswaRepository` - Student questionnaire answers
//! - `HasilRepository` - Recommendation snapshots
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token validation
//! - `TokenIssuer` - Token signing on login
//! - `PasswordHasher` - Password hashing and verification

mod alumni_repository;
mod bwm_repository;
mod hasil_repository;
mod jurusan_repository;
mod kriteria_repository;
mod nilai_repository;
mod password_hasher;
mod periode_repository;
mod session_validator;
mod settings_repository;
mod token_issuer;
mod user_repository;

pub use alumni_repository::AlumniRepository;
pub use bwm_repository::BwmRepository;
pub use hasil_repository::HasilRepository;
pub use jurusan_repository::JurusanRepository;
pub use kriteria_repository::KriteriaRepository;
pub use nilai_repository::NilaiSiswaRepository;
pub use password_hasher::PasswordHasher;
pub use periode_repository::{PeriodeRepository, PeriodeSummary};
pub use session_validator::SessionValidator;
pub use settings_repository::SettingsRepository;
pub use token_issuer::TokenIssuer;
pub use user_repository::{UserCredentials, UserRepository};
