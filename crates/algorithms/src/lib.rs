//! Ternary cryptographic primitives
//!
//! This crate provides the balanced-ternary building blocks of tcrypt: the
//! [`TryteString`] buffer with its byte, tryte and trit conversions, and the
//! Curl-P sponge hash. The library is usable in both `std` and `no_std`
//! (with `alloc`) environments.
//!
//! # Security Features
//!
//! - Sponge state and permutation scratch space are zeroized when dropped
//! - Sponge `Debug` output never reveals the state
//! - All inputs are validated before they reach the permutation

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Sponge hash implementations
pub mod hash;
pub use hash::{Curl, CurlP27, CurlP81, Sponge};

// Ternary encodings
pub mod ternary;
pub use ternary::TryteString;

pub use tcrypt_api::Trit;
