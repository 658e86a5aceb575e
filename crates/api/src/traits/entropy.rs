//! Entropy sources for key material generation
//!
//! Seed generation never reaches for a global RNG. Callers hand in anything that
//! can produce a requested number of random bytes: a `rand` CSPRNG, the OS source,
//! or, in tests, a deterministic fake built with [`from_fn`].

use crate::error::{Error, Result};
use alloc::vec;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};

/// A source of random bytes
pub trait EntropySource {
    /// Return exactly `count` random bytes
    ///
    /// Failures of the underlying source are reported as
    /// [`Error::RandomGenerationError`] and must not be retried by the caller.
    fn bytes(&mut self, count: usize) -> Result<Vec<u8>>;
}

impl<R: RngCore + CryptoRng> EntropySource for R {
    fn bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.try_fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

/// Entropy source backed by a closure
///
/// Created with [`from_fn`].
pub struct FnEntropy<F> {
    source: F,
}

impl<F> EntropySource for FnEntropy<F>
where
    F: FnMut(usize) -> Result<Vec<u8>>,
{
    fn bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        (self.source)(count)
    }
}

impl<F> core::fmt::Debug for FnEntropy<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnEntropy")
    }
}

/// Wrap a `count -> bytes` function as an [`EntropySource`]
///
/// ```
/// use tcrypt_api::entropy::{self, EntropySource};
///
/// let mut zeros = entropy::from_fn(|n| Ok(vec![0u8; n]));
/// assert_eq!(zeros.bytes(4).unwrap(), vec![0u8; 4]);
/// ```
pub fn from_fn<F>(source: F) -> FnEntropy<F>
where
    F: FnMut(usize) -> Result<Vec<u8>>,
{
    FnEntropy { source }
}

/// An entropy source that always fails
///
/// Useful for exercising error propagation in callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn bytes(&mut self, _count: usize) -> Result<Vec<u8>> {
        Err(Error::RandomGenerationError {
            context: "FailingEntropy",
            message: "entropy source unavailable".into(),
        })
    }
}
