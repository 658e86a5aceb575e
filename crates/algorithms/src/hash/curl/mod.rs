//! Curl-P ternary sponge
//!
//! 729-trit state, 243-trit rate. The permutation applies a fixed three-input
//! S-box to pairs of state trits selected by a stride of 364 (mod 729), repeated
//! for a fixed number of rounds. Curl-P-81 is the standard variant; Curl-P-27 is
//! the reduced-round variant used for transaction hashing.

use zeroize::{Zeroize, ZeroizeOnDrop};

use tcrypt_api::{SpongeAlgorithm, Trit};
use tcrypt_params::utils::hash::{
    CURL_HASH_LENGTH, CURL_P27_ROUNDS, CURL_P81_ROUNDS, CURL_STATE_LENGTH,
};

use crate::error::{validate, Result};
use crate::hash::Sponge;

/// S-box lookup, indexed by `a + 4 * b + 5` for trits `a`, `b`.
///
/// Entries 3 and 7 are unreachable for balanced inputs.
const TRUTH_TABLE: [Trit; 11] = [1, 0, -1, 2, 1, -1, 0, 2, -1, 1, 0];

const INDEX_FORWARD: usize = 364;
const INDEX_BACKWARD: usize = 365;

// ──────────────────────────────── permutation ──────────────────────────────

fn transform(state: &mut [Trit; CURL_STATE_LENGTH], rounds: usize) {
    let mut scratch = [0 as Trit; CURL_STATE_LENGTH];
    let mut index = 0usize;

    for _ in 0..rounds {
        scratch.copy_from_slice(state);
        for slot in state.iter_mut() {
            let a = scratch[index];
            index = if index < INDEX_BACKWARD {
                index + INDEX_FORWARD
            } else {
                index - INDEX_BACKWARD
            };
            let b = scratch[index];
            *slot = TRUTH_TABLE[(a + (b << 2) + 5) as usize];
        }
    }

    scratch.zeroize();
}

/// Marker type for **Curl-P-81**.
pub enum CurlP81Algorithm {}
/// Marker type for **Curl-P-27**.
pub enum CurlP27Algorithm {}

impl SpongeAlgorithm for CurlP81Algorithm {
    const HASH_LENGTH: usize = CURL_HASH_LENGTH;
    const ROUNDS: usize = CURL_P81_ROUNDS;
    const ALGORITHM_ID: &'static str = "Curl-P-81";
}
impl SpongeAlgorithm for CurlP27Algorithm {
    const HASH_LENGTH: usize = CURL_HASH_LENGTH;
    const ROUNDS: usize = CURL_P27_ROUNDS;
    const ALGORITHM_ID: &'static str = "Curl-P-27";
}

// ──────────────────────────────── engines ──────────────────────────────────

/// Streaming **Curl-P-81** engine.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CurlP81 {
    state: [Trit; CURL_STATE_LENGTH],
}

/// Streaming **Curl-P-27** engine.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CurlP27 {
    state: [Trit; CURL_STATE_LENGTH],
}

/// The default Curl variant
pub type Curl = CurlP81;

macro_rules! impl_curl_variant {
    ($name:ident, $alg:ty) => {
        impl $name {
            #[inline(always)]
            fn init() -> Self {
                Self {
                    state: [0; CURL_STATE_LENGTH],
                }
            }

            fn absorb_internal(&mut self, trits: &[Trit]) -> Result<()> {
                validate::parameter(!trits.is_empty(), "trits", "cannot absorb an empty input")?;
                validate::trits(concat!(stringify!($name), "::absorb"), trits)?;

                for chunk in trits.chunks(CURL_HASH_LENGTH) {
                    self.state[..chunk.len()].copy_from_slice(chunk);
                    // The final chunk is zero padded to a full rate.
                    self.state[chunk.len()..CURL_HASH_LENGTH].fill(0);
                    transform(&mut self.state, <$alg as SpongeAlgorithm>::ROUNDS);
                }
                Ok(())
            }

            fn squeeze_internal(&mut self, out: &mut [Trit]) -> Result<()> {
                validate::multiple_of(
                    concat!(stringify!($name), "::squeeze"),
                    out.len(),
                    CURL_HASH_LENGTH,
                )?;

                for chunk in out.chunks_mut(CURL_HASH_LENGTH) {
                    chunk.copy_from_slice(&self.state[..CURL_HASH_LENGTH]);
                    transform(&mut self.state, <$alg as SpongeAlgorithm>::ROUNDS);
                }
                Ok(())
            }
        }

        impl Sponge for $name {
            type Algorithm = $alg;

            fn new() -> Self {
                Self::init()
            }

            fn absorb(&mut self, trits: &[Trit]) -> Result<&mut Self> {
                self.absorb_internal(trits)?;
                Ok(self)
            }

            fn squeeze(&mut self, out: &mut [Trit]) -> Result<()> {
                self.squeeze_internal(out)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::init()
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}[REDACTED]", <$alg as SpongeAlgorithm>::ALGORITHM_ID)
            }
        }
    };
}

impl_curl_variant!(CurlP81, CurlP81Algorithm);
impl_curl_variant!(CurlP27, CurlP27Algorithm);
