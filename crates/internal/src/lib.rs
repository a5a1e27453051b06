//! Internal utilities for the hashkit library
//!
//! Not part of the public API surface; the facade re-exports it only for
//! other hashkit crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
