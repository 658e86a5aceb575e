//! Ternary one-time signature key material
//!
//! This crate derives the key material consumed by Winternitz-style ternary
//! one-time signatures: random [`Seed`]s and the chained Curl-P digest of a
//! [`SigningKey`]. Signing and verification themselves live elsewhere.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod pq;

pub use error::{Error, Result};

// Re-exports from post-quantum schemes
pub use pq::wots::{KeyDigestDeriver, Seed, SigningKey};
