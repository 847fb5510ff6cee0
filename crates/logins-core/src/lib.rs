//! # logins-core
//!
//! Domain layer for the login directory: the `Login` entity, the error
//! taxonomy, repository capability traits, and the clock/UUID providers the
//! repository is constructed with. This crate has no infrastructure
//! dependencies (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod providers;
pub mod traits;
pub mod value_objects;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types at crate root
pub use entities::{Login, NewLogin};
pub use error::DomainError;
pub use providers::{Clock, RandomUuidGenerator, SystemClock, UuidGenerator};
pub use traits::{
    LoginBlocker, LoginFinder, LoginGetter, LoginRepository, LoginSaver, RepoResult,
};
pub use value_objects::{PageBounds, PageWindow, PageWindowParseError};
