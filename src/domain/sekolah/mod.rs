//! Sekolah - majors, alumni and school settings.

mod alumni;
mod jurusan;
mod settings;

pub use alumni::{Alumni, AlumniDraft};
pub use jurusan::{Jurusan, JurusanDraft, NilaiStaticJurusan};
pub use settings::{
    bwm_reference, validate_settings_update, SchoolSettings, BWM_BEST_KEY, BWM_WORST_KEY,
    EDITABLE_KEYS,
};
