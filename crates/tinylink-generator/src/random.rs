use crate::Generator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use tinylink_core::ShortCode;

/// Characters a generated code is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 6;

/// Produces 6-character codes drawn uniformly from `[A-Za-z0-9]`.
///
/// The random source is a type parameter so tests can inject a seeded one.
/// It sits behind a mutex because `Generator::generate` takes `&self`.
#[derive(Debug)]
pub struct RandomGenerator<R = StdRng> {
    rng: Mutex<R>,
}

impl RandomGenerator<StdRng> {
    /// Creates a generator seeded from operating system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn next_code(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl<R: Rng + Send + 'static> Generator for RandomGenerator<R> {
    fn generate(&self) -> ShortCode {
        ShortCode::generated(self.next_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    #[test]
    fn alphabet_is_base62() {
        assert_eq!(ALPHABET.len(), 62);
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn codes_have_fixed_length_and_alphabet() {
        let generator = RandomGenerator::new();

        for _ in 0..200 {
            let code = generator.generate();
            assert!(code.is_generated());
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn same_seed_same_codes() {
        let a = RandomGenerator::seeded(42);
        let b = RandomGenerator::seeded(42);

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = RandomGenerator::seeded(1);
        let b = RandomGenerator::seeded(2);

        let first: Vec<_> = (0..5).map(|_| a.generate()).collect();
        let second: Vec<_> = (0..5).map(|_| b.generate()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn constant_source_yields_constant_code() {
        // A source stuck at zero always picks the first letter.
        let generator = RandomGenerator::from_rng(StepRng::new(0, 0));
        assert_eq!(generator.generate().as_str(), "AAAAAA");
        assert_eq!(generator.generate().as_str(), "AAAAAA");
    }

    #[test]
    fn every_character_is_reachable() {
        let generator = RandomGenerator::seeded(7);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            seen.extend(generator.generate().as_str().bytes());
        }
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
