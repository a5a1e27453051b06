//! Parameter groups

pub mod hash;
