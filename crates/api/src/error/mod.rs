//! Error handling for the tcrypt ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

use alloc::string::ToString;

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "entropy source",
            message: e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Other {
            context: "I/O operation",
            message: e.to_string(),
        }
    }
}

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}
