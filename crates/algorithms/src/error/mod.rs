//! Error handling for ternary primitives

use alloc::borrow::Cow;
use alloc::string::ToString;
use core::fmt;

use tcrypt_api::Error as CoreError;

/// The error type for ternary primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length (in the unit of the context: trits or trytes)
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Tryte or trit encoding error
    Encoding {
        /// Context where the malformed input was found
        context: &'static str,
        /// Offset of the first offending element
        position: usize,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Processing error during a sponge operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for ternary primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding {
                context,
                position,
                details,
            } => {
                write!(
                    f,
                    "Invalid encoding in {} at position {}: {}",
                    context, position, details
                )
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "primitives",
                message: alloc::format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding {
                context,
                position,
                details,
            } => CoreError::InvalidEncoding {
                context,
                message: alloc::format!("{} (position {})", details, position),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use tcrypt_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
