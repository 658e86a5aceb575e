//! Sponge hash algorithm markers
//!
//! The concrete sponge engines live in `tcrypt-algorithms`; this trait only
//! describes the fixed dimensions of an algorithm so that parameter sets and
//! higher-level schemes can check them without depending on an engine.

/// Marker trait describing a ternary sponge construction
pub trait SpongeAlgorithm {
    /// Number of trits produced by one squeeze (and absorbed per chunk)
    const HASH_LENGTH: usize;

    /// Number of permutation rounds per transform
    const ROUNDS: usize;

    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;
}
