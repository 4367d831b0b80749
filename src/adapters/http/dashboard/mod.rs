//! Dashboard endpoint.
//!
//! - `GET /dashboard/stats` - staff totals or a student's history, by role

pub mod handlers;
pub mod routes;

pub use routes::dashboard_routes;
