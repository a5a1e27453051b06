//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, representing the output of a
//! cryptographic hash function with compile-time size guarantees.

use core::fmt;
use core::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use crate::error::{validate, Error, Result};
use crate::types::ConstantTimeEq;

/// A cryptographic digest of exactly `N` bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Convert to a lowercase hexadecimal string, two characters per byte
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Parse a digest from exactly `2 * N` hexadecimal characters
    ///
    /// Either case is accepted.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        validate::parameter(
            hex_str.len() % 2 == 0,
            "hex_str",
            "Odd number of hex digits",
        )?;
        validate::length("Digest::from_hex", hex_str.len() / 2, N)?;

        let mut data = [0u8; N];
        hex::decode_to_slice(hex_str, &mut data)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;
        Ok(Self { data })
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({:x})", N, self)
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        hashkit_internal::constant_time::ct_eq(self.data, other.data)
    }
}
