//! Entity to model mappers
//!
//! - `From<LoginModel> for Login`: convert database rows to domain objects
//! - `LoginInsert`/`LoginUpdate`: bind values for write statements

mod login;

pub use login::{LoginInsert, LoginUpdate};
