//! Demonstration data for a fresh installation.

mod seed_demo_data;

pub use seed_demo_data::{SeedDemoDataHandler, SeedReport};
