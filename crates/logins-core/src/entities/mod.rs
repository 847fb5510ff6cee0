//! Domain entities - core business objects

mod login;

pub use login::{Login, NewLogin};
