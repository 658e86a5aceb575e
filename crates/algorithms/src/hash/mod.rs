//! Ternary sponge hash functions
//!
//! A sponge absorbs an arbitrary number of trits and squeezes out hash-sized
//! blocks. Engines are stateful: callers that need independent hashes must
//! create a fresh instance for each one.

use alloc::vec;
use alloc::vec::Vec;

use tcrypt_api::{SpongeAlgorithm, Trit};

use crate::error::Result;

pub mod curl;

pub use curl::{Curl, CurlP27, CurlP27Algorithm, CurlP81, CurlP81Algorithm};

/// Trait implemented by every ternary sponge engine
pub trait Sponge: Sized {
    /// Algorithm marker carrying the sponge dimensions
    type Algorithm: SpongeAlgorithm;

    /// Create an engine with an all-zero state
    fn new() -> Self;

    /// Absorb trits into the state
    fn absorb(&mut self, trits: &[Trit]) -> Result<&mut Self>;

    /// Fill `out` with squeezed trits
    ///
    /// `out` must be a non-zero multiple of the hash length.
    fn squeeze(&mut self, out: &mut [Trit]) -> Result<()>;

    /// Trits produced by one squeeze
    fn hash_length() -> usize {
        <Self::Algorithm as SpongeAlgorithm>::HASH_LENGTH
    }

    /// Algorithm identifier
    fn name() -> &'static str {
        <Self::Algorithm as SpongeAlgorithm>::ALGORITHM_ID
    }

    /// One-shot hash: fresh engine, absorb, squeeze one hash, discard
    fn hash(trits: &[Trit]) -> Result<Vec<Trit>> {
        let mut out = vec![0; Self::hash_length()];
        Self::new().absorb(trits)?.squeeze(&mut out)?;
        Ok(out)
    }
}
