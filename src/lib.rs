//! # hashkit
//!
//! The FIPS 180-4 SHA-2 family in pure Rust: SHA-224, SHA-256, SHA-384,
//! SHA-512, SHA-512/224 and SHA-512/256.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hashkit = "0.3"
//! ```
//!
//! ```
//! use hashkit::prelude::*;
//!
//! // One-shot
//! let digest = Sha512_256::digest(b"abc")?;
//! assert_eq!(digest.len(), 32);
//!
//! // Streaming, with the context reused after init()
//! let mut hasher = Sha256::new();
//! hasher.update(b"a")?.update(b"bc")?;
//! assert_eq!(hasher.finalize()?, Sha256::digest(b"abc")?);
//! hasher.init();
//!
//! // Parsing a published digest; errors lift into `hashkit::api::Error`
//! let expected = Digest::<32>::from_hex(
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! )?;
//! assert!(Sha256::verify(b"abc", &expected)?);
//! # Ok::<(), hashkit::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, implies `alloc`
//! - `alloc`: hex rendering of digests without full `std`
//! - `algorithms` (default): the SHA-2 implementations
//! - `unrolled-rounds`: eight-way unrolled compression rounds
//! - `tracing`: trace events on context reset and finalization
//! - `full`: all of the above except `unrolled-rounds` and `tracing`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`hashkit-algorithms`]: compression engines, streaming contexts, digests
//! - [`hashkit-api`]: the unified error type
//! - [`hashkit-common`]: zeroizing wrappers for transient secrets
//! - [`hashkit-internal`]: constant-time comparison
//! - [`hashkit-params`]: block, digest and round sizes

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use hashkit_api as api;
pub use hashkit_common as common;
pub use hashkit_internal as internal;
pub use hashkit_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use hashkit_algorithms as algorithms;

/// Common imports for hashkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, ZeroizeGuard};
    pub use zeroize::Zeroize;

    // Hash functions and their traits
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::hash::{
        HashAlgorithm, HashFunction, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
    };
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::types::{ConstantTimeEq, Digest};
}
