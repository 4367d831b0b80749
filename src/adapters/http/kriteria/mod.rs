//! Criteria management endpoints (admin).
//!
//! - `GET /kriteria` - all criteria in natural code order
//! - `POST /kriteria` - create
//! - `PUT /kriteria/{id}` - update; the code never changes
//! - `DELETE /kriteria/{id}` - delete with its values and weights

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{KriteriaRequest, KriteriaResponse};
pub use routes::kriteria_routes;
