use std::sync::{Arc, Mutex, PoisonError};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use thiserror::Error;
use tracing::error;

use oauth_types::nonce::Nonce;

/// 136 bits of entropy, rendered as 23 base64url characters.
pub const NONCE_BYTES: usize = 17;

#[derive(Debug, Error)]
#[error("Secure random source is unavailable")]
pub struct EntropyError(#[from] rand::Error);

/// Source of random bytes used for nonces. Shared by every request-handling
/// thread, so implementations must be safe to call concurrently.
pub trait RandomSource: Send + Sync {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Copy, Clone)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    #[inline]
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(dest)
    }
}

/// Deterministic source for reproducible fixtures. Not for production use.
pub struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        let mut rng = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        rng.try_fill_bytes(dest)
    }
}

#[derive(Clone)]
pub struct NonceGenerator {
    source: Arc<dyn RandomSource>,
}

impl NonceGenerator {
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Draws a fresh nonce. Uniqueness relies on entropy alone; there is no
    /// registry of issued values. A failing source is never replaced by a
    /// weaker one.
    pub fn generate(&self) -> Result<Nonce, EntropyError> {
        let mut bytes = [0u8; NONCE_BYTES];
        self.source.try_fill(&mut bytes).map_err(|err| {
            error!("Unable to read from secure random source: {}", err);
            EntropyError(err)
        })?;
        Ok(Nonce::new(URL_SAFE_NO_PAD.encode(bytes)))
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new(Arc::new(OsRandom))
    }
}

/// Source that always fails, as an exhausted or missing OS generator would.
#[cfg(test)]
pub(crate) struct BrokenSource;

#[cfg(test)]
impl RandomSource for BrokenSource {
    fn try_fill(&self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        let code = std::num::NonZeroU32::new(rand::Error::CUSTOM_START).unwrap();
        Err(rand::Error::from(code))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::nonce::{BrokenSource, NonceGenerator, SeededRandom};

    fn is_unreserved(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
    }

    #[test]
    fn test_nonces_do_not_repeat() {
        let generator = NonceGenerator::default();

        let nonces: HashSet<String> = (0..1000)
            .map(|_| generator.generate().unwrap().into())
            .collect();

        assert_eq!(1000, nonces.len())
    }

    #[test]
    fn test_nonce_needs_no_escaping() {
        let generator = NonceGenerator::default();

        for _ in 0..1000 {
            let nonce = generator.generate().unwrap().to_string();
            assert_eq!(23, nonce.len());
            assert!(nonce.chars().all(is_unreserved), "{} needs escaping", nonce);
            assert_eq!(nonce, urlencoding::encode(&nonce));
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let first = NonceGenerator::new(Arc::new(SeededRandom::new(42)));
        let second = NonceGenerator::new(Arc::new(SeededRandom::new(42)));

        assert_eq!(first.generate().unwrap(), second.generate().unwrap());
        assert_ne!(first.generate().unwrap(), first.generate().unwrap());
    }

    #[test]
    fn test_broken_source_is_an_error() {
        let generator = NonceGenerator::new(Arc::new(BrokenSource));

        assert!(generator.generate().is_err())
    }

    #[test]
    fn test_generator_is_shareable_between_threads() {
        let generator = NonceGenerator::default();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = generator.clone();
                std::thread::spawn(move || {
                    (0..250)
                        .map(|_| String::from(generator.generate().unwrap()))
                        .collect::<Vec<String>>()
                })
            })
            .collect();

        let nonces: HashSet<String> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(1000, nonces.len())
    }
}
