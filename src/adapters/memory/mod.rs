//! In-memory adapters for every repository port.
//!
//! [`InMemoryStore`] keeps all tables behind one lock, so multi-table
//! operations (period activation, grade promotion, BWM submission) are as
//! atomic as their Postgres counterparts. It backs the handler and HTTP
//! tests.

mod academic;
mod accounts;
mod decision;
mod store;

pub use store::InMemoryStore;
