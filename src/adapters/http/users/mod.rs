//! Account administration endpoints (admin).
//!
//! - `GET/POST /admin/siswa`, `PUT/DELETE /admin/siswa/{id}`
//! - `GET/POST /admin/pakar`, `PUT/DELETE /admin/pakar/{id}`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::users_routes;
