//! Maps algorithm identifiers to streaming digest functions

use std::collections::HashMap;

use hashkit_algorithms::hash::{
    HashFunction, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
};
use once_cell::sync::Lazy;

use super::error::{Result, SuiteError};
use super::model::Message;

/// Handler function type
pub type HandlerFn = fn(&Message) -> Result<Vec<u8>>;

/// Global registry of digest handlers, keyed by `HashFunction::name`
pub static REGISTRY: Lazy<HashMap<&'static str, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<&'static str, HandlerFn>::new();
    register::<Sha224>(&mut m);
    register::<Sha256>(&mut m);
    register::<Sha384>(&mut m);
    register::<Sha512>(&mut m);
    register::<Sha512_224>(&mut m);
    register::<Sha512_256>(&mut m);
    m
});

fn register<H: HashFunction>(map: &mut HashMap<&'static str, HandlerFn>) {
    map.insert(H::name(), digest_message::<H>);
}

/// Stream `message` through a fresh `H` context
///
/// Repeated patterns are fed one copy per `update` call, so gigabyte inputs
/// never need to be materialized.
pub fn digest_message<H: HashFunction>(message: &Message) -> Result<Vec<u8>> {
    let mut hasher = H::new();
    match message {
        Message::Bytes(bytes) => {
            hasher.update(bytes)?;
        }
        Message::Repeat { pattern, count } => {
            for _ in 0..*count {
                hasher.update(pattern)?;
            }
        }
    }
    Ok(hasher.finalize()?.as_ref().to_vec())
}

/// Look up the handler for `algorithm` and run it
pub fn dispatch(algorithm: &str, message: &Message) -> Result<Vec<u8>> {
    let handler = REGISTRY
        .get(algorithm)
        .ok_or_else(|| SuiteError::UnknownAlgorithm(algorithm.to_string()))?;
    handler(message)
}
