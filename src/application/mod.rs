//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (writes) and query handlers (reads) are kept separate.

pub mod handlers;
