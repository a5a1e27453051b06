//! Hash function implementations
//!
//! Every SHA-2 variant implements [`HashFunction`], which captures the
//! init / update / complete lifecycle of a streaming context together with
//! the one-shot conveniences built on top of it.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use crate::error::Result;
use crate::types::ConstantTimeEq;

pub mod sha2;

// Re-exports
pub use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// Static description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable identifier, e.g. "SHA-512/256"
    const ALGORITHM_ID: &'static str;
}

/// Trait for streaming cryptographic hash functions
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: HashAlgorithm;

    /// Digest type produced by [`HashFunction::finalize`]
    type Output: AsRef<[u8]> + ConstantTimeEq + Clone;

    /// Creates a freshly initialized context
    fn new() -> Self;

    /// Resets the context to its initial value, discarding any input
    ///
    /// This is the only way to reuse a context after `finalize`.
    fn init(&mut self);

    /// Absorbs `data` into the running hash
    ///
    /// Fails only when the context has already been finalized.
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Pads the message, processes the final block(s) and returns the digest
    ///
    /// The context is finalized afterwards; call [`HashFunction::init`]
    /// before feeding it another message.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Like [`HashFunction::finalize`], but writes the digest into the
    /// leading `output_size()` bytes of a caller-supplied buffer
    fn complete_into(&mut self, out: &mut [u8]) -> Result<()>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Hashes `data` and renders the digest as lowercase hex
    #[cfg(feature = "alloc")]
    fn digest_hex(data: &[u8]) -> Result<String> {
        let digest = Self::digest(data)?;
        Ok(hex::encode(digest.as_ref()))
    }

    /// Hashes `data` and compares the result with `expected` in constant time
    fn verify(data: &[u8], expected: &Self::Output) -> Result<bool> {
        let computed = Self::digest(data)?;
        Ok(computed.ct_eq(expected))
    }
}
