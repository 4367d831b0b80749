//! What-if calculators. Nothing is stored.
//!
//! - `POST /simulation/bwm` - weights for an ad-hoc comparison set
//! - `POST /simulation/moora` - rank ad-hoc alternatives
//! - `POST /simulation/integrated` - both, BWM weights feeding MOORA

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::simulation_routes;
