//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects, pagination, authentication types and
//! the error vocabulary used by every other domain module.

mod auth;
mod errors;
mod ids;
mod pagination;
mod percentage;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, Role};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlumniId, HasilId, JurusanId, KriteriaId, PeriodeId, UserId};
pub use pagination::{Page, PageMeta, PageRequest, DEFAULT_PER_PAGE};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
