//! Login and the current-account lookup.

mod current_user;
mod login;

pub use current_user::CurrentUserHandler;
pub use login::{LoginCommand, LoginHandler, LoginResult};
