//! Error types for the signing key crate

use alloc::format;
use alloc::string::{String, ToString};

use thiserror::Error;

use tcrypt_algorithms::Error as AlgoError;
use tcrypt_api::Error as CoreError;

/// Errors that can occur while generating or digesting key material
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Signing key length is not a whole number of blocks
    ///
    /// Both lengths are in trytes, or in trits when the key was built from trits.
    #[error("Invalid signing key length: {actual} is not a multiple of the block length {block_len}")]
    InvalidBlockLength {
        /// Required block length
        block_len: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// The entropy source failed or returned the wrong amount of data
    #[error("Entropy source failure: {0}")]
    Entropy(String),

    /// Parameter set and sponge disagree on the block layout
    #[error("Inconsistent {scheme} parameters: {details}")]
    Structure {
        /// Parameter set name
        scheme: &'static str,
        /// Which relation does not hold
        details: &'static str,
    },

    /// A fragment or block passed to the digest schedule has the wrong size
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        /// Operation that checked the length
        context: &'static str,
        /// Required length in trits
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Sponge rejected its input or output buffer
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Malformed trytes or trits
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for signing key operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::Encoding { .. } => Error::Encoding(err.to_string()),
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidLength {
                context,
                expected,
                actual,
            },
            _ => Error::Hashing(err.to_string()),
        }
    }
}

// Every api error reaching this crate comes from an entropy source.
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::RandomGenerationError { context, message } => {
                Error::Entropy(format!("{}: {}", context, message))
            }
            other => Error::Entropy(other.to_string()),
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidBlockLength { .. } => CoreError::InvalidKey {
                context: "SigningKey",
                message: err.to_string(),
            },
            Error::Entropy(message) => CoreError::RandomGenerationError {
                context: "Seed",
                message,
            },
            Error::Structure { scheme, details } => CoreError::InvalidParameter {
                context: scheme,
                message: details.into(),
            },
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Hashing(message) => CoreError::Other {
                context: "hashing",
                message,
            },
            Error::Encoding(message) => CoreError::InvalidEncoding {
                context: "sign",
                message,
            },
        }
    }
}
