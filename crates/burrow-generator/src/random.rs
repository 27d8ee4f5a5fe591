use crate::Generator;
use burrow_core::{Alias, GeneratorError, ALPHABET};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random alias generator drawing each character uniformly from [`ALPHABET`].
///
/// The PRNG is seeded from the operating system on construction, so every
/// process start yields a different stream. A single instance is shared by
/// all requests; the lock makes concurrent calls safe.
#[derive(Debug)]
pub struct RandomGenerator {
    rng: Mutex<StdRng>,
}

impl RandomGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a generator with a fixed seed. Two generators built from the
    /// same seed produce the same aliases.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    fn generate(&self, length: usize) -> Result<Alias, GeneratorError> {
        if length == 0 {
            return Err(GeneratorError::InvalidLength(length));
        }

        let mut rng = self.rng.lock();
        let alias: String = (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        Ok(Alias::new_unchecked(alias))
    }
}
