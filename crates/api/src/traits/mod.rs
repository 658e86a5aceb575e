//! Trait definitions for the seams between tcrypt crates

pub mod entropy;
pub mod sponge;

pub use entropy::EntropySource;
pub use sponge::SpongeAlgorithm;
