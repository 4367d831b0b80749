//! Best-Worst Method endpoints.
//!
//! - `GET/POST /bwm/admin/setting` - lock the best and worst reference (admin)
//! - `GET /bwm/input-context` - what an expert needs to fill the form
//! - `POST /bwm/save` - submit comparisons and recompute the expert's weights
//! - `GET /bwm/weights` - weights averaged over experts

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::bwm_routes;
