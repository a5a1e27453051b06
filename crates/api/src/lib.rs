//! Public API types for the hashkit library
//!
//! This crate holds the error type every hashkit crate converts into, so that
//! callers of the facade only ever match on one error enum.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
