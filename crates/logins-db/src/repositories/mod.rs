//! Repository implementations
//!
//! PostgreSQL implementation of the login capabilities defined in logins-core.

mod error;
mod login;

pub use login::PgLoginRepository;
