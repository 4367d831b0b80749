//! HTTP middleware for axum.
//!
//! - `auth` - token validation and the user extractors

pub mod auth;

pub use auth::{auth_middleware, AuthRejection, AuthState, OptionalAuth, RequireAuth};
