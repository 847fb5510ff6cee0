//! Database models - SQLx-compatible structs for PostgreSQL tables

mod login;

pub use login::LoginModel;
