//! SHA-2 hash functions with zeroizing, incremental contexts
//!
//! This crate implements the FIPS 180-4 SHA-2 family: SHA-224, SHA-256,
//! SHA-384, SHA-512, SHA-512/224 and SHA-512/256. Every variant supports
//! one-shot hashing as well as streaming input through `update` calls of
//! arbitrary size. The library is usable in both `std` and `no_std`
//! environments.
//!
//! # Security Features
//!
//! - Message schedules and working variables are wiped after every block
//! - Contexts zeroize their chaining value and buffer on drop
//! - Digest comparison in [`HashFunction::verify`] runs in constant time
//!
//! # Example
//!
//! ```
//! use hashkit_algorithms::hash::{HashFunction, Sha256};
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"ab")?.update(b"c")?;
//! let digest = hasher.finalize()?;
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), hashkit_algorithms::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction};
pub use hash::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest};
