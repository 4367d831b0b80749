//! Authentication adapters.
//!
//! Implementations of the `SessionValidator`, `TokenIssuer` and
//! `PasswordHasher` ports:
//!
//! - `jwt` - HS256 tokens signed with the configured key
//! - `bcrypt_hasher` - bcrypt password hashes
//! - `mock` - Test implementations without keys or hashing cost

mod bcrypt_hasher;
mod jwt;
mod mock;

pub use bcrypt_hasher::BcryptHasher;
pub use jwt::JwtAuth;
pub use mock::{MockPasswordHasher, MockSessionValidator, MockTokenIssuer};
