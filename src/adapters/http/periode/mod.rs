//! Academic period and promotion endpoints (admin).
//!
//! - `GET/POST /periode`, `PUT/DELETE /periode/{id}`
//! - `GET /periode/{id}/activation-preview` - direction and confirmation copy
//! - `POST /periode/{id}/activate` - switch the active period
//! - `GET /promotion/summary`, `POST /promotion/execute` - year-end promotion

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::periode_routes;
