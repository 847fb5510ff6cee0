//! External identifier generation

use uuid::Uuid;

/// Generator of globally unique login identifiers
pub trait UuidGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Random (v4) UUID generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidGenerator;

impl UuidGenerator for RandomUuidGenerator {
    #[inline]
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
