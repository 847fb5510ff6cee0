//! Business logic services

pub mod context;
pub mod error;
pub mod listing;
pub mod login;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use listing::{fetch_page, LoginPage};
pub use login::LoginService;
