//! Error type definitions for hashing operations

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for hashkit operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "alloc")]
        message: String,
    },

    /// An operation was invoked on an object in the wrong lifecycle state,
    /// e.g. updating a hash context that has already been finalized
    InvalidState {
        context: &'static str,
        #[cfg(feature = "alloc")]
        message: String,
    },
}

/// Result type for hashkit operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "alloc")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "alloc"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "alloc")]
            Self::InvalidState { context, message } => {
                write!(f, "Invalid state in {}: {}", context, message)
            }
            #[cfg(not(feature = "alloc"))]
            Self::InvalidState { context } => {
                write!(f, "Invalid state in {}", context)
            }
        }
    }
}
