//! SPK Karir - career guidance decision support for vocational schools.
//!
//! Experts weigh the criteria with the Best-Worst Method (BWM); every
//! student's answers are then ranked with MOORA against three pathways:
//! further study, work and entrepreneurship.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
