//! Word abstraction shared by the 32-bit and 64-bit SHA-2 engines
//!
//! SHA-224/256 and SHA-384/512 run the same Merkle–Damgård pipeline; they
//! differ only in word width, round count, rotation amounts and tables.
//! [`Word`] captures those differences so the compression function and the
//! streaming context are written once.

use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, Not, Shr};

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use hashkit_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_LENGTH_FIELD_SIZE, SHA256_ROUNDS, SHA512_BLOCK_SIZE,
    SHA512_LENGTH_FIELD_SIZE, SHA512_ROUNDS,
};

use super::constants::{K256, K512};
use crate::types::sealed::Sealed;

/// Machine word driving one SHA-2 engine
pub trait Word:
    Sealed
    + 'static
    + Copy
    + Debug
    + Eq
    + Zeroize
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    /// Bytes per word
    const BYTES: usize;
    /// Bytes per message block (16 words)
    const BLOCK_SIZE: usize;
    /// Compression rounds per block
    const ROUNDS: usize;
    /// Marker byte plus length field; a block holding more than
    /// `BLOCK_SIZE - PAD_MIN` buffered bytes spills padding into a second block
    const PAD_MIN: usize;
    /// Round constants, `ROUNDS` entries
    const K: &'static [Self];

    /// Rotations for Σ0
    const BIG_SIGMA0: [u32; 3];
    /// Rotations for Σ1
    const BIG_SIGMA1: [u32; 3];
    /// Two rotations and a shift for σ0
    const SMALL_SIGMA0: [u32; 3];
    /// Two rotations and a shift for σ1
    const SMALL_SIGMA1: [u32; 3];

    /// Two-block byte buffer holding pending input and padding
    type Buffer: AsRef<[u8]> + AsMut<[u8]> + Copy + Zeroize;
    /// Message schedule, `ROUNDS` words
    type Schedule: AsRef<[Self]> + AsMut<[Self]> + Zeroize;

    /// All-zero buffer
    const EMPTY_BUFFER: Self::Buffer;
    /// All-zero schedule
    const EMPTY_SCHEDULE: Self::Schedule;

    /// Modular addition
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Right rotation
    fn rotate_right(self, n: u32) -> Self;

    /// Read one big-endian word from the first `BYTES` bytes of `bytes`
    fn read_be(bytes: &[u8]) -> Self;

    /// Write this word big-endian into the first `BYTES` bytes of `out`
    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_word {
    (
        $word:ty,
        block: $block:expr, rounds: $rounds:expr, length_field: $length_field:expr,
        table: $table:expr,
        big: [$b00:expr, $b01:expr, $b02:expr], [$b10:expr, $b11:expr, $b12:expr],
        small: [$s00:expr, $s01:expr, $s02:expr], [$s10:expr, $s11:expr, $s12:expr],
        read: $read:ident, write: $write:ident
    ) => {
        impl Word for $word {
            const BYTES: usize = core::mem::size_of::<$word>();
            const BLOCK_SIZE: usize = $block;
            const ROUNDS: usize = $rounds;
            const PAD_MIN: usize = 1 + $length_field;
            const K: &'static [Self] = &$table;

            const BIG_SIGMA0: [u32; 3] = [$b00, $b01, $b02];
            const BIG_SIGMA1: [u32; 3] = [$b10, $b11, $b12];
            const SMALL_SIGMA0: [u32; 3] = [$s00, $s01, $s02];
            const SMALL_SIGMA1: [u32; 3] = [$s10, $s11, $s12];

            type Buffer = [u8; 2 * $block];
            type Schedule = [$word; $rounds];

            const EMPTY_BUFFER: Self::Buffer = [0u8; 2 * $block];
            const EMPTY_SCHEDULE: Self::Schedule = [0; $rounds];

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$word>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotate_right(self, n: u32) -> Self {
                <$word>::rotate_right(self, n)
            }

            #[inline(always)]
            fn read_be(bytes: &[u8]) -> Self {
                BigEndian::$read(bytes)
            }

            #[inline(always)]
            fn write_be(self, out: &mut [u8]) {
                BigEndian::$write(out, self)
            }
        }

        // A block is sixteen words
        const _: () = assert!($block == 16 * core::mem::size_of::<$word>());
    };
}

impl_word!(
    u32,
    block: SHA256_BLOCK_SIZE, rounds: SHA256_ROUNDS, length_field: SHA256_LENGTH_FIELD_SIZE,
    table: K256,
    big: [2, 13, 22], [6, 11, 25],
    small: [7, 18, 3], [17, 19, 10],
    read: read_u32, write: write_u32
);

impl_word!(
    u64,
    block: SHA512_BLOCK_SIZE, rounds: SHA512_ROUNDS, length_field: SHA512_LENGTH_FIELD_SIZE,
    table: K512,
    big: [28, 34, 39], [14, 18, 41],
    small: [1, 8, 7], [19, 61, 6],
    read: read_u64, write: write_u64
);

/// Right rotation by `n` bits
#[inline(always)]
pub fn rotr<W: Word>(x: W, n: u32) -> W {
    x.rotate_right(n)
}

/// Logical right shift by `n` bits
#[inline(always)]
pub fn shr<W: Word>(x: W, n: u32) -> W {
    x >> n
}

/// Ch(x, y, z): take `y` where `x` is set, `z` elsewhere
#[inline(always)]
pub fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

/// Maj(x, y, z): bitwise majority
#[inline(always)]
pub fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0, applied to working variable `a`
#[inline(always)]
pub fn big_sigma0<W: Word>(x: W) -> W {
    let [r0, r1, r2] = W::BIG_SIGMA0;
    rotr(x, r0) ^ rotr(x, r1) ^ rotr(x, r2)
}

/// Σ1, applied to working variable `e`
#[inline(always)]
pub fn big_sigma1<W: Word>(x: W) -> W {
    let [r0, r1, r2] = W::BIG_SIGMA1;
    rotr(x, r0) ^ rotr(x, r1) ^ rotr(x, r2)
}

/// σ0, used by the message schedule
#[inline(always)]
pub fn small_sigma0<W: Word>(x: W) -> W {
    let [r0, r1, s] = W::SMALL_SIGMA0;
    rotr(x, r0) ^ rotr(x, r1) ^ shr(x, s)
}

/// σ1, used by the message schedule
#[inline(always)]
pub fn small_sigma1<W: Word>(x: W) -> W {
    let [r0, r1, s] = W::SMALL_SIGMA1;
    rotr(x, r0) ^ rotr(x, r1) ^ shr(x, s)
}
