//! Criteria - the attributes that parameterize the ranking.
//!
//! A criterion says which pathways it applies to, whether higher is better,
//! what scale it is measured on, and how a student answers it.

mod definition;
mod input;
mod jalur;
mod natural_sort;

pub use definition::{
    Atribut, Kategori, Kriteria, KriteriaDefinition, KriteriaDraft, PenanggungJawab, SumberNilai,
};
pub use input::{InputWidget, OpsiPilihan, TipeInput, TipeInputKind, LIKERT_SCALE};
pub use jalur::{Jalur, JalurSet};
pub use natural_sort::{compare_kode, natural_sort_by_kode};

#[cfg(test)]
pub(crate) use definition::tests::draft as test_draft;
