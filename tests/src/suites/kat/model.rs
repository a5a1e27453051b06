//! Data model for known-answer vector files.
//! No dependency on the rest of the framework.

use serde::Deserialize;

use super::error::{Result, SuiteError};

/// One TOML file: every case targets the same algorithm
#[derive(Debug, Deserialize)]
pub struct VectorFile {
    /// Algorithm identifier as reported by `HashFunction::name`, e.g. "SHA-512/256"
    pub algorithm: String,
    #[serde(default)]
    pub cases: Vec<VectorCase>,
}

/// A single message/digest pair
///
/// The message is given as exactly one of `ascii`, `hex` or `repeat` (with
/// `count`), so million-byte and gigabyte inputs stay a single line.
#[derive(Debug, Deserialize)]
pub struct VectorCase {
    pub name: String,
    #[serde(default)]
    pub ascii: Option<String>,
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    pub repeat: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    /// Expected digest, lowercase hex
    pub digest: String,
    /// Long-running cases only run when explicitly requested
    #[serde(default)]
    pub expensive: bool,
}

/// Decoded message, ready to be streamed into a hasher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Bytes(Vec<u8>),
    Repeat { pattern: Vec<u8>, count: u64 },
}

impl Message {
    /// Total message length in bytes
    pub fn len(&self) -> u64 {
        match self {
            Message::Bytes(bytes) => bytes.len() as u64,
            Message::Repeat { pattern, count } => pattern.len() as u64 * count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VectorCase {
    pub fn message(&self) -> Result<Message> {
        let invalid = |reason| SuiteError::InvalidCase {
            case: self.name.clone(),
            reason,
        };

        match (&self.ascii, &self.hex, &self.repeat) {
            (Some(ascii), None, None) => Ok(Message::Bytes(ascii.as_bytes().to_vec())),
            (None, Some(hex_msg), None) => Ok(Message::Bytes(hex::decode(hex_msg)?)),
            (None, None, Some(pattern)) => {
                let count = self.count.ok_or_else(|| invalid("`repeat` requires `count`"))?;
                if pattern.is_empty() {
                    return Err(invalid("`repeat` pattern must not be empty"));
                }
                Ok(Message::Repeat {
                    pattern: pattern.as_bytes().to_vec(),
                    count,
                })
            }
            _ => Err(invalid("exactly one of `ascii`, `hex` or `repeat` must be set")),
        }
    }

    pub fn expected_digest(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.digest)?)
    }
}
