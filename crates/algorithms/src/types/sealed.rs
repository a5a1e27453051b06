//! Sealed traits for keeping word-level abstractions closed to this crate

/// Implemented only for the machine words the SHA-2 engines run on
pub trait Sealed {}

impl Sealed for u32 {}
impl Sealed for u64 {}
