//! SHA-2 hash function family (FIPS 180-4)
//!
//! Six variants over two engines:
//!
//! | Variant     | Engine | Block | Digest |
//! |-------------|--------|-------|--------|
//! | SHA-224     | 32-bit | 64    | 28     |
//! | SHA-256     | 32-bit | 64    | 32     |
//! | SHA-384     | 64-bit | 128   | 48     |
//! | SHA-512     | 64-bit | 128   | 64     |
//! | SHA-512/224 | 64-bit | 128   | 28     |
//! | SHA-512/256 | 64-bit | 128   | 32     |
//!
//! SHA-224 and SHA-384 share their engine with SHA-256 and SHA-512 and
//! differ only in initial value and output length. SHA-512/224 and
//! SHA-512/256 are SHA-512 contexts started from their own initial values
//! and truncated on output.

use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

use hashkit_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE,
    SHA512_224_OUTPUT_SIZE, SHA512_256_OUTPUT_SIZE, SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE,
};

mod compress;
pub mod constants;
mod context;
mod word;

pub use self::context::Sha2Core;
pub use self::word::Word;
use self::constants::{
    SHA224_H0, SHA256_H0, SHA384_H0, SHA512_224_H0, SHA512_256_H0, SHA512_H0,
};

/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// Marker type for SHA-224 algorithm
pub enum Sha224Algorithm {}

impl HashAlgorithm for Sha224Algorithm {
    const OUTPUT_SIZE: usize = SHA224_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-224";
}

/// Marker type for SHA-384 algorithm
pub enum Sha384Algorithm {}

impl HashAlgorithm for Sha384Algorithm {
    const OUTPUT_SIZE: usize = SHA384_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-384";
}

/// Marker type for SHA-512 algorithm
pub enum Sha512Algorithm {}

impl HashAlgorithm for Sha512Algorithm {
    const OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-512";
}

/// Marker type for SHA-512/224 algorithm
pub enum Sha512_224Algorithm {}

impl HashAlgorithm for Sha512_224Algorithm {
    const OUTPUT_SIZE: usize = SHA512_224_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-512/224";
}

/// Marker type for SHA-512/256 algorithm
pub enum Sha512_256Algorithm {}

impl HashAlgorithm for Sha512_256Algorithm {
    const OUTPUT_SIZE: usize = SHA512_256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-512/256";
}

/// Variants backed directly by a [`Sha2Core`]
macro_rules! sha2_hasher {
    ($(#[$meta:meta])* $name:ident, $algorithm:ident, $word:ty, $iv:expr, $out:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            core: Sha2Core<$word>,
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.core.zeroize();
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }

        impl HashFunction for $name {
            type Algorithm = $algorithm;
            type Output = Digest<$out>;

            fn new() -> Self {
                Self {
                    core: Sha2Core::new($iv),
                }
            }

            fn init(&mut self) {
                self.core.init();
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.core.update(data)?;
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let mut out = [0u8; $out];
                self.core.complete(&mut out)?;
                Ok(Digest::new(out))
            }

            fn complete_into(&mut self, out: &mut [u8]) -> Result<()> {
                validate::min_length(concat!(stringify!($name), " output"), out.len(), $out)?;
                self.core.complete(&mut out[..$out])
            }
        }
    };
}

sha2_hasher!(
    /// SHA-224 hash function
    Sha224, Sha224Algorithm, u32, SHA224_H0, SHA224_OUTPUT_SIZE
);
sha2_hasher!(
    /// SHA-256 hash function
    Sha256, Sha256Algorithm, u32, SHA256_H0, SHA256_OUTPUT_SIZE
);
sha2_hasher!(
    /// SHA-384 hash function
    Sha384, Sha384Algorithm, u64, SHA384_H0, SHA384_OUTPUT_SIZE
);
sha2_hasher!(
    /// SHA-512 hash function
    Sha512, Sha512Algorithm, u64, SHA512_H0, SHA512_OUTPUT_SIZE
);

impl Sha512 {
    /// Create a SHA-512 engine that starts from a caller-chosen initial value
    ///
    /// The context behaves exactly like SHA-512 apart from its starting
    /// state, and [`HashFunction::init`] returns to `iv`. This is how the
    /// truncated SHA-512/t variants are built.
    pub fn with_iv(iv: [u64; 8]) -> Self {
        Self {
            core: Sha2Core::new(iv),
        }
    }
}

/// Truncated variants running a full SHA-512 underneath
macro_rules! sha512_truncated {
    ($(#[$meta:meta])* $name:ident, $algorithm:ident, $iv:expr, $out:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            inner: Sha512,
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.inner.zeroize();
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }

        impl HashFunction for $name {
            type Algorithm = $algorithm;
            type Output = Digest<$out>;

            fn new() -> Self {
                Self {
                    inner: Sha512::with_iv($iv),
                }
            }

            fn init(&mut self) {
                self.inner.init();
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.inner.update(data)?;
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let full = self.inner.finalize()?;
                let mut out = [0u8; $out];
                out.copy_from_slice(&full.as_ref()[..$out]);
                Ok(Digest::new(out))
            }

            fn complete_into(&mut self, out: &mut [u8]) -> Result<()> {
                validate::min_length(concat!(stringify!($name), " output"), out.len(), $out)?;
                let full = self.inner.finalize()?;
                out[..$out].copy_from_slice(&full.as_ref()[..$out]);
                Ok(())
            }
        }
    };
}

sha512_truncated!(
    /// SHA-512/224 hash function
    Sha512_224, Sha512_224Algorithm, SHA512_224_H0, SHA512_224_OUTPUT_SIZE
);
sha512_truncated!(
    /// SHA-512/256 hash function
    Sha512_256, Sha512_256Algorithm, SHA512_256_H0, SHA512_256_OUTPUT_SIZE
);
