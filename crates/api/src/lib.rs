//! Public API traits and types for the tcrypt library
//!
//! This crate provides the public API surface for the tcrypt ecosystem, including
//! trait definitions, error types, and the ternary primitives shared by every
//! other crate in the workspace.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{EntropySource, SpongeAlgorithm};

// Re-export trait modules for direct access
pub use traits::{entropy, sponge};
