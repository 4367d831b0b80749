//! Criterion configuration handlers.

mod create_kriteria;
mod delete_kriteria;
mod list_kriteria;
mod update_kriteria;

pub use create_kriteria::{CreateKriteriaCommand, CreateKriteriaHandler};
pub use delete_kriteria::{DeleteKriteriaCommand, DeleteKriteriaHandler};
pub use list_kriteria::ListKriteriaHandler;
pub use update_kriteria::{UpdateKriteriaCommand, UpdateKriteriaHandler};
