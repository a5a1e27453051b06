//! Structured error types for the known-answer suite

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("hash operation failed: {0}")]
    Hash(#[from] hashkit_algorithms::Error),

    #[error("unsupported algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("case {case}: {reason}")]
    InvalidCase { case: String, reason: &'static str },

    #[error("case {case}: mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        case: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, SuiteError>;
