//! Providers the repository is constructed with
//!
//! Time and identifier generation are passed in at construction.

mod clock;
mod uuid_generator;

pub use clock::{Clock, SystemClock};
pub use uuid_generator::{RandomUuidGenerator, UuidGenerator};
