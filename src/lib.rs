//! # tcrypt
//!
//! Balanced-ternary key material for Winternitz-style one-time signatures.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tcrypt = "0.3"
//! ```
//!
//! ```
//! use tcrypt::prelude::*;
//!
//! # fn main() -> tcrypt::sign::Result<()> {
//! let seed = Seed::generate()?;
//! assert_eq!(seed.len(), 82);
//!
//! let key: SigningKey = SigningKey::from_trytes(&"A".repeat(2187))?;
//! let digest = key.get_digest_trits()?;
//! assert_eq!(digest.len(), key.block_count() * 243);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): OS entropy and `std::error::Error` impls
//! - `sign` (default): seeds, signing keys and the digest schedule
//! - `serde`: serialize tryte strings as tryte text
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`tcrypt-api`]: Error type, trit type, entropy and sponge traits
//! - [`tcrypt-algorithms`]: Tryte strings and the Curl-P sponge
//! - [`tcrypt-params`]: Ternary and scheme constants
//! - [`tcrypt-sign`]: Seeds, signing keys and key digests

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use tcrypt_algorithms as algorithms;
pub use tcrypt_api as api;
pub use tcrypt_internal as internal;
pub use tcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use tcrypt_sign as sign;

/// Common imports for tcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and types
    pub use crate::api::{EntropySource, SpongeAlgorithm, Trit};
    pub use crate::algorithms::{Curl, CurlP27, CurlP81, Sponge, TryteString};

    #[cfg(feature = "sign")]
    pub use crate::sign::pq::wots::{KeyDigestDeriver, Seed, SigningKey, SigningKeyParams, WotsParams};
}
