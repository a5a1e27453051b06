//! Common implementations and shared functionality for the hashkit library
//!
//! Hash contexts hold every byte that passes through them in their block
//! buffer and message schedule. The types here make sure those intermediates
//! are wiped once they go out of scope.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, ZeroizeGuard};
