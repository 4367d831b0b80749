//! Sign-in endpoints.
//!
//! - `POST /auth/login` - exchange credentials for a bearer token
//! - `GET /auth/me` - the signed-in account

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
