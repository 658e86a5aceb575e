//! Constants for ternary sponge hash functions

/// Number of trits squeezed per hash (and absorbed per chunk) by Curl-P
pub const CURL_HASH_LENGTH: usize = 243;

/// Size of the Curl-P internal state in trits (rate plus capacity)
pub const CURL_STATE_LENGTH: usize = 3 * CURL_HASH_LENGTH;

/// Number of rounds of the standard Curl-P permutation
pub const CURL_P81_ROUNDS: usize = 81;

/// Number of rounds of the reduced Curl-P permutation
pub const CURL_P27_ROUNDS: usize = 27;
