//! SHA-2 block compression
//!
//! Two renderings of the same round function are always compiled: a plain
//! loop over the rounds, and an eight-way unrolled variant that renames the
//! working variables instead of shifting them. The `unrolled-rounds` feature
//! selects which one [`compress_blocks`] uses; both must agree bit for bit.

use super::word::{big_sigma0, big_sigma1, ch, maj, small_sigma0, small_sigma1, Word};
use crate::types::{EphemeralSecret, ZeroizeGuard};

#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

/// Run the compression function over every block in `blocks`
///
/// `blocks.len()` must be a multiple of `W::BLOCK_SIZE`; an empty slice
/// leaves `state` untouched.
pub(crate) fn compress_blocks<W: Word>(state: &mut [W; 8], blocks: &[u8]) {
    debug_assert_eq!(blocks.len() % W::BLOCK_SIZE, 0);

    for block in blocks.chunks_exact(W::BLOCK_SIZE) {
        #[cfg(feature = "unrolled-rounds")]
        compress_unrolled(state, block);
        #[cfg(not(feature = "unrolled-rounds"))]
        compress_looped(state, block);
    }
}

/// Fill the message schedule from one block
fn expand<W: Word>(block: &[u8], w: &mut [W]) {
    for (word, bytes) in w[..16].iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *word = W::read_be(bytes);
    }

    for i in 16..W::ROUNDS {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }
}

/// Compress one block with a rolled round loop
#[cfg_attr(feature = "unrolled-rounds", allow(dead_code))]
pub(crate) fn compress_looped<W: Word>(state: &mut [W; 8], block: &[u8]) {
    // Use EphemeralSecret for message schedule
    let mut schedule = EphemeralSecret::new(W::EMPTY_SCHEDULE);

    // Memory barrier before processing
    compiler_fence(Ordering::SeqCst);

    let w = AsMut::<[W]>::as_mut(&mut *schedule);
    expand(block, w);

    // Use ZeroizeGuard for working variables
    let mut working_vars = *state;
    let mut guard = ZeroizeGuard::new(&mut working_vars);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *guard;

    for (&k, &wi) in W::K.iter().zip(w.iter()) {
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(wi);
        let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    *guard = [a, b, c, d, e, f, g, h];

    for (s, v) in state.iter_mut().zip(guard.iter()) {
        *s = s.wrapping_add(*v);
    }

    // Memory barrier after processing
    compiler_fence(Ordering::SeqCst);
}

/// Compress one block with the rounds unrolled eight at a time
///
/// Eight rounds bring the working variables back to their starting names,
/// so each pass of the outer loop rotates the macro arguments rather than
/// moving values between variables.
#[cfg_attr(not(feature = "unrolled-rounds"), allow(dead_code))]
pub(crate) fn compress_unrolled<W: Word>(state: &mut [W; 8], block: &[u8]) {
    let mut schedule = EphemeralSecret::new(W::EMPTY_SCHEDULE);
    compiler_fence(Ordering::SeqCst);

    let w = AsMut::<[W]>::as_mut(&mut *schedule);
    expand(block, w);

    let mut working_vars = *state;
    let mut guard = ZeroizeGuard::new(&mut working_vars);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *guard;

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $i:expr) => {
            let temp1 = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(W::K[$i])
                .wrapping_add(w[$i]);
            let temp2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));
            $d = $d.wrapping_add(temp1);
            $h = temp1.wrapping_add(temp2);
        };
    }

    // 64 and 80 are both multiples of 8
    for i in (0..W::ROUNDS).step_by(8) {
        round!(a, b, c, d, e, f, g, h, i);
        round!(h, a, b, c, d, e, f, g, i + 1);
        round!(g, h, a, b, c, d, e, f, i + 2);
        round!(f, g, h, a, b, c, d, e, i + 3);
        round!(e, f, g, h, a, b, c, d, i + 4);
        round!(d, e, f, g, h, a, b, c, i + 5);
        round!(c, d, e, f, g, h, a, b, i + 6);
        round!(b, c, d, e, f, g, h, a, i + 7);
    }

    *guard = [a, b, c, d, e, f, g, h];

    for (s, v) in state.iter_mut().zip(guard.iter()) {
        *s = s.wrapping_add(*v);
    }

    compiler_fence(Ordering::SeqCst);
}
