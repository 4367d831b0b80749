//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - JWT sessions and bcrypt password hashing
//! - `client` - typed HTTP client for the REST API
//! - `http` - axum routes, extractors and error mapping
//! - `memory` - in-memory store backing every repository port
//! - `postgres` - sqlx repositories and migrations

pub mod auth;
pub mod client;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{BcryptHasher, JwtAuth};
pub use http::{api_router, AppState};
pub use memory::InMemoryStore;
