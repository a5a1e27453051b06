//! Test suites for the hashkit library
//!
//! The known-answer suite reads TOML vector files from `src/vectors/` and
//! drives every SHA-2 variant through the streaming API. Integration tests
//! under `tests/` build on it and add property tests and cross-checks.
pub mod suites;
