//! Streaming context shared by every SHA-2 variant

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use super::compress::compress_blocks;
use super::word::Word;
use crate::error::{validate, Result};
use crate::types::EphemeralSecret;

/// Incremental SHA-2 state for one engine width
///
/// Holds the chaining value, the initial value it restarts from, a two-block
/// buffer for pending input and padding, and the count of bytes already
/// compressed. The message length is carried in a `u64` byte counter and
/// encoded as the low 64 bits of the bit length, so messages are limited to
/// 2^64 - 1 bits on both engines.
#[derive(Clone)]
pub struct Sha2Core<W: Word> {
    state: [W; 8],
    iv: [W; 8],
    buffer: W::Buffer,
    buffered_len: usize,
    total_len: u64,
    finalized: bool,
}

impl<W: Word> Sha2Core<W> {
    /// Create a context that starts from `iv`
    pub fn new(iv: [W; 8]) -> Self {
        Self {
            state: iv,
            iv,
            buffer: W::EMPTY_BUFFER,
            buffered_len: 0,
            total_len: 0,
            finalized: false,
        }
    }

    /// Reset to the initial value, discarding any pending input
    ///
    /// Valid in any state, including after [`complete`](Self::complete).
    pub fn init(&mut self) {
        self.state = self.iv;
        self.buffer.zeroize();
        self.buffered_len = 0;
        self.total_len = 0;
        self.finalized = false;

        #[cfg(feature = "tracing")]
        tracing::trace!(word_bits = W::BYTES * 8, "SHA-2 context initialized");
    }

    /// Absorb `data`
    ///
    /// Whole blocks are compressed straight from `data`; only the tail that
    /// does not fill a block is copied into the buffer.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        validate::state(
            !self.finalized,
            "SHA-2 update",
            "context already finalized; call init() first",
        )?;

        let block_size = W::BLOCK_SIZE;
        let room = block_size - self.buffered_len;
        let take = data.len().min(room);

        self.buffer.as_mut()[self.buffered_len..self.buffered_len + take]
            .copy_from_slice(&data[..take]);

        if self.buffered_len + data.len() < block_size {
            self.buffered_len += data.len();
            return Ok(());
        }

        let rest = &data[take..];
        let block_nb = rest.len() / block_size;
        let (blocks, tail) = rest.split_at(block_nb * block_size);

        compress_blocks(&mut self.state, &self.buffer.as_ref()[..block_size]);
        compress_blocks(&mut self.state, blocks);

        self.buffer.as_mut()[..tail.len()].copy_from_slice(tail);
        self.buffered_len = tail.len();
        self.total_len = self
            .total_len
            .wrapping_add(((block_nb + 1) * block_size) as u64);

        Ok(())
    }

    /// Pad, compress the final block(s) and write the leading `out.len()`
    /// bytes of the big-endian chaining value into `out`
    ///
    /// `out` may be shorter than the full state (that is how the truncated
    /// variants are produced) but not longer. The context is finalized
    /// afterwards and rejects further input until [`init`](Self::init).
    pub fn complete(&mut self, out: &mut [u8]) -> Result<()> {
        validate::state(
            !self.finalized,
            "SHA-2 complete",
            "context already finalized; call init() first",
        )?;
        validate::max_length("SHA-2 digest output", out.len(), 8 * W::BYTES)?;

        let block_size = W::BLOCK_SIZE;
        let block_nb = if self.buffered_len > block_size - W::PAD_MIN {
            2
        } else {
            1
        };
        let padded_len = block_nb * block_size;
        let bit_len = self
            .total_len
            .wrapping_add(self.buffered_len as u64)
            .wrapping_mul(8);

        let buffer = self.buffer.as_mut();
        buffer[self.buffered_len..padded_len].fill(0);
        buffer[self.buffered_len] = 0x80;
        BigEndian::write_u64(&mut buffer[padded_len - 8..padded_len], bit_len);

        compress_blocks(&mut self.state, &self.buffer.as_ref()[..padded_len]);

        let mut serialized = EphemeralSecret::new(W::EMPTY_BUFFER);
        let bytes = AsMut::<[u8]>::as_mut(&mut *serialized);
        for (word, chunk) in self.state.iter().zip(bytes.chunks_exact_mut(W::BYTES)) {
            word.write_be(chunk);
        }
        out.copy_from_slice(&bytes[..out.len()]);

        self.buffer.zeroize();
        self.finalized = true;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            word_bits = W::BYTES * 8,
            bit_len,
            padded_blocks = block_nb,
            output_len = out.len(),
            "SHA-2 digest completed"
        );

        Ok(())
    }

    /// Bytes waiting in the buffer, always less than one block
    pub fn buffered_len(&self) -> usize {
        self.buffered_len
    }

    /// Bytes already compressed in whole blocks
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Whether [`complete`](Self::complete) has run since the last reset
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Current chaining value
    pub fn state(&self) -> &[W; 8] {
        &self.state
    }
}

impl<W: Word> fmt::Debug for Sha2Core<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha2Core")
            .field("word_bits", &(W::BYTES * 8))
            .field("buffered_len", &self.buffered_len)
            .field("total_len", &self.total_len)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

impl<W: Word> Zeroize for Sha2Core<W> {
    fn zeroize(&mut self) {
        // The initial value is public and is what init() restarts from.
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffered_len.zeroize();
        self.total_len.zeroize();
        // A wiped chaining value is not a valid state; require init().
        self.finalized = true;
    }
}

impl<W: Word> Drop for Sha2Core<W> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
