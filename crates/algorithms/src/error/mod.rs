//! Error handling for the SHA-2 primitives

use core::fmt;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::ToString;

use hashkit_api::Error as CoreError;

/// The error type for the hash primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Operation invoked on a context in the wrong lifecycle state
    State {
        /// Operation that was rejected
        operation: &'static str,
        /// What the caller has to do instead
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for hash primitive operations
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
            Error::State { operation, details } => {
                write!(f, "Invalid state for {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "alloc"))]
                let _ = reason;
                CoreError::InvalidParameter {
                    context: name,
                    #[cfg(feature = "alloc")]
                    message: reason.to_string(),
                }
            }
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::State { operation, details } => {
                #[cfg(not(feature = "alloc"))]
                let _ = details;
                CoreError::InvalidState {
                    context: operation,
                    #[cfg(feature = "alloc")]
                    message: details.to_string(),
                }
            }
        }
    }
}

pub mod validate;
