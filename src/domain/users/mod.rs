//! Users - student and expert accounts managed by the admin.

mod user;

pub use user::{
    JenisPakar, NewUser, PakarDraft, SiswaDraft, User, UserFilter, DEFAULT_PAKAR_PASSWORD,
    DEFAULT_SISWA_PASSWORD,
};
