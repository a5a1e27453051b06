//! Type-safe wrappers for hash outputs
//!
//! Digests carry their size in the type, so a SHA-224 result can never be
//! handed to code expecting a SHA-256 one.

pub mod digest;
pub(crate) mod sealed;

// Re-export main types
pub use digest::Digest;

// Import and re-export security types from hashkit-common
pub use hashkit_common::security::{EphemeralSecret, ZeroizeGuard};

/// Trait for types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
