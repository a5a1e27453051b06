//! Constant values for hashkit
//!
//! Sizes that callers need without pulling in the algorithm crate, for
//! example to allocate digest buffers.

#![no_std]

pub mod utils;
