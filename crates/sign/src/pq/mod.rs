//! Hash-based post-quantum key material

pub mod wots;

pub use wots::{KeyDigestDeriver, Seed, SigningKey};
