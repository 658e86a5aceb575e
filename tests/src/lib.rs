//! Shared fixtures for the tcrypt integration and property tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tcrypt_algorithms::{Trit, TryteString};
use tcrypt_api::{EntropySource, Result};
use tcrypt_params::pqc::wots::SigningKeyParams;
use tcrypt_sign::SigningKey;


/// Entropy source returning only zero bytes
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroEntropy;

impl EntropySource for ZeroEntropy {
    fn bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(vec![0u8; count])
    }
}

/// Entropy source returning `0, 1, 2, ...` and recording every request
#[derive(Debug, Default, Clone)]
pub struct CountingEntropy {
    next: u8,
    requests: Vec<usize>,
}

impl CountingEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte counts requested so far
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }
}

impl EntropySource for CountingEntropy {
    fn bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.requests.push(count);
        let bytes = (0..count)
            .map(|_| {
                let b = self.next;
                self.next = self.next.wrapping_add(1);
                b
            })
            .collect();
        Ok(bytes)
    }
}

/// Deterministic CSPRNG for reproducible test inputs
pub fn test_rng(seed: u8) -> ChaCha20Rng {
    ChaCha20Rng::from_seed([seed; 32])
}

/// Repeat `pattern` until `len` trytes are filled
pub fn repeat_trytes(pattern: &str, len: usize) -> TryteString {
    let text: String = pattern.chars().cycle().take(len).collect();
    TryteString::from_trytes(text).expect("pattern uses the tryte alphabet")
}

/// Signing key of `blocks` blocks filled with `pattern`
pub fn pattern_key<P: SigningKeyParams>(pattern: &str, blocks: usize) -> SigningKey<P> {
    SigningKey::new(repeat_trytes(pattern, blocks * P::BLOCK_LEN)).expect("whole blocks")
}

/// Render trits as trytes for readable assertions
pub fn trytes_of(trits: &[Trit]) -> String {
    TryteString::from_trits(trits)
        .expect("balanced trits")
        .as_str()
        .to_owned()
}

/// Parameter set with one 243-trit fragment per block
///
/// Keeps the full chain length while making a block 27 times cheaper, so
/// property tests can afford many cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleFragmentParams;

impl SigningKeyParams for SingleFragmentParams {
    const NAME: &'static str = "WOTS-single-fragment";
    const BLOCK_LEN: usize = 81;
    const HASH_LENGTH: usize = 243;
    const FRAGMENTS_PER_BLOCK: usize = 1;
    const CHAIN_ROUNDS: usize = 26;
}
