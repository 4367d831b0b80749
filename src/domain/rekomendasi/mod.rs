//! Rekomendasi - student answers, the questionnaire and stored results.

mod form;
mod hasil;
mod nilai;

pub use form::{form_fields, FormField};
pub use hasil::{periode_label, HasilDraft, HasilRekomendasi, JawabanSnapshot};
pub use nilai::{missing_static_values, validate_answers, NilaiSiswa, DEFAULT_STATIC_VALUE};
