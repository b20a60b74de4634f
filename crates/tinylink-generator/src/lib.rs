pub mod random;

pub use random::RandomGenerator;

use tinylink_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// They make no uniqueness promise: avoiding collisions with stored codes
/// is the caller's job.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self) -> ShortCode;
}

impl<G: Generator> Generator for std::sync::Arc<G> {
    fn generate(&self) -> ShortCode {
        (**self).generate()
    }
}
