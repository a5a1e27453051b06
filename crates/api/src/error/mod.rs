//! Error handling for the hashkit ecosystem

pub mod types;

pub use types::{Error, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}
