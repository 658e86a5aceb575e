//! Error type definitions for ternary cryptographic operations

use alloc::string::String;

/// Primary error type for tcrypt operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Malformed tryte or trit encoding
    InvalidEncoding {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for tcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// Length errors carry structured data instead of a message and are
    /// returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength { .. } => self,
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidEncoding { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding: {}: {}", context, message)
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
