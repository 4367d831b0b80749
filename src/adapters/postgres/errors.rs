//! sqlx error mapping shared by the Postgres repositories.

use crate::domain::foundation::DomainError;

/// Conflict message per unique constraint in the schema.
const UNIQUE_CONSTRAINTS: [(&str, &str); 8] = [
    ("jurusan_kode_jurusan_key", "Kode jurusan sudah digunakan"),
    ("users_username_key", "Username sudah digunakan"),
    ("users_email_key", "Email sudah digunakan"),
    ("users_nisn_key", "NISN sudah digunakan"),
    ("kriteria_kode_key", "Kode kriteria sudah digunakan"),
    ("periode_nama_periode_key", "Nama periode sudah digunakan"),
    ("periode_urutan_key", "Urutan periode sudah digunakan"),
    ("periode_single_active_idx", "Hanya satu periode yang boleh aktif"),
];

/// Maps a sqlx failure to a domain error. Known unique violations become
/// `Conflict`, everything else is a `DatabaseError` carrying `context`.
pub(super) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                let message = db_err
                    .constraint()
                    .and_then(|name| UNIQUE_CONSTRAINTS.iter().find(|(c, _)| *c == name))
                    .map(|(_, message)| *message)
                    .unwrap_or("Data sudah ada");
                return DomainError::conflict(message);
            }
        }
        DomainError::database(context, e)
    }
}

/// Error for a stored value that no longer parses.
pub(super) fn corrupt(column: &str, value: &str) -> DomainError {
    DomainError::database("decode row", format!("invalid {} value '{}'", column, value))
}

/// Converts a page bound to a bind parameter.
pub(super) fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Converts a count column to the domain's unsigned count.
pub(super) fn to_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
