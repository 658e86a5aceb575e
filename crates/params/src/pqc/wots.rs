//! Constants for Winternitz-style ternary one-time signature keys
//!
//! A signing key is a sequence of blocks. Each block is split into hash-sized
//! fragments, and each fragment is chained through the sponge a fixed number of
//! times before the whole block is compressed into one hash. These numbers are
//! part of the key format: changing any of them yields incompatible digests.

use crate::utils::hash::CURL_HASH_LENGTH;
use crate::utils::ternary::TRITS_PER_TRYTE;

/// Length of one signing key block in trytes
pub const WOTS_BLOCK_LEN: usize = 2187;

/// Length of one signing key block in trits
pub const WOTS_BLOCK_TRITS: usize = WOTS_BLOCK_LEN * TRITS_PER_TRYTE;

/// Number of hash-sized fragments in a block
pub const WOTS_FRAGMENTS_PER_BLOCK: usize = 27;

/// Number of sponge rounds applied to every fragment
pub const WOTS_CHAIN_ROUNDS: usize = 26;

/// Recommended minimum seed length in trytes (one hash)
pub const WOTS_SEED_LEN: usize = 81;

/// Common trait for signing key parameter sets
pub trait SigningKeyParams: Send + Sync + 'static {
    /// Parameter set name
    const NAME: &'static str;

    /// Block length in trytes; key lengths must be a multiple of it
    const BLOCK_LEN: usize;

    /// Block length in trits
    const BLOCK_TRITS: usize = Self::BLOCK_LEN * TRITS_PER_TRYTE;

    /// Trits per fragment and per digest segment
    const HASH_LENGTH: usize;

    /// Fragments per block
    const FRAGMENTS_PER_BLOCK: usize;

    /// Sponge rounds per fragment chain
    const CHAIN_ROUNDS: usize;
}

/// Canonical parameter set: 2187-tryte blocks, 27 fragments of 243 trits,
/// 26 chained Curl-P rounds per fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WotsParams;

impl SigningKeyParams for WotsParams {
    const NAME: &'static str = "WOTS-CurlP81";
    const BLOCK_LEN: usize = WOTS_BLOCK_LEN;
    const HASH_LENGTH: usize = CURL_HASH_LENGTH;
    const FRAGMENTS_PER_BLOCK: usize = WOTS_FRAGMENTS_PER_BLOCK;
    const CHAIN_ROUNDS: usize = WOTS_CHAIN_ROUNDS;
}

// A block must split exactly into hash-sized fragments.
const _: () = assert!(WOTS_FRAGMENTS_PER_BLOCK * CURL_HASH_LENGTH == WOTS_BLOCK_TRITS);
