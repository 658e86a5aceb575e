//! Winternitz-style ternary one-time signature key material
//!
//! A [`Seed`] is drawn from an injectable [`EntropySource`]. A [`SigningKey`]
//! is a whole number of 2187-tryte blocks; its digest is derived by
//! [`KeyDigestDeriver`], which chains every 243-trit fragment of a block
//! through 26 fresh Curl-P sponges and compresses the chained block into one
//! hash. The digest has one hash per block.
//!
//! ```
//! use tcrypt_sign::{Seed, SigningKey};
//!
//! let key: SigningKey = SigningKey::from_trytes(&"9".repeat(2187)).unwrap();
//! assert_eq!(key.block_count(), 1);
//! assert_eq!(key.get_digest_trits().unwrap().len(), 243);
//!
//! let mut zeros = tcrypt_api::entropy::from_fn(|n| Ok(vec![0u8; n]));
//! let seed = Seed::random(&mut zeros).unwrap();
//! assert_eq!(seed.len(), 82);
//! ```
//!
//! [`EntropySource`]: tcrypt_api::EntropySource

mod digest;
mod key;
mod seed;

pub use digest::KeyDigestDeriver;
pub use key::SigningKey;
pub use seed::Seed;

// Re-export from params crate for easy access to the parameter sets.
pub use tcrypt_params::pqc::wots::{SigningKeyParams, WotsParams};
