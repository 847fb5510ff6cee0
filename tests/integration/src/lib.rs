//! Integration test utilities for the login directory
//!
//! Spawns the real API on an ephemeral port, backed by the PostgreSQL
//! database named in `DATABASE_URL`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
