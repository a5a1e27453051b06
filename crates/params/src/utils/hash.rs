//! Constants for the SHA-2 hash family (FIPS 180-4)

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA-512/224 in bytes
pub const SHA512_224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-512/256 in bytes
pub const SHA512_256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-224 and SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-384, SHA-512 and the truncated variants in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Rounds of the 32-bit compression function
pub const SHA256_ROUNDS: usize = 64;

/// Rounds of the 64-bit compression function
pub const SHA512_ROUNDS: usize = 80;

/// Bytes of the message-length field appended by SHA-256 padding
pub const SHA256_LENGTH_FIELD_SIZE: usize = 8;

/// Bytes of the message-length field appended by SHA-512 padding
///
/// Only the low 8 bytes ever carry a non-zero value, which limits messages
/// to 2^64 - 1 bits.
pub const SHA512_LENGTH_FIELD_SIZE: usize = 16;
