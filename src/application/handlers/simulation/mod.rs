//! Ad-hoc BWM and MOORA runs for the simulation screen. Nothing here is
//! persisted.

mod integrated;
mod simulate_bwm;
mod simulate_moora;

pub use integrated::{IntegratedScenario, IntegratedSimulation, SimulateIntegratedHandler};
pub use simulate_bwm::{BwmScenario, BwmSimulation, SimulateBwmHandler};
pub use simulate_moora::{MooraScenario, SimulateMooraHandler};
