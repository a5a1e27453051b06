// Hashing without an allocator: every SHA-2 context lives on the stack and
// digests can be written into caller-owned buffers. Only main() prints, so
// the helpers below build unchanged under no_std.

use hashkit_algorithms::hash::{HashFunction, Sha256, Sha512_256};
use hashkit_algorithms::types::Digest;
use hashkit_algorithms::Error;

// Streamed input, digest returned by value
fn streaming_example() -> Result<Digest<32>, Error> {
    let mut hasher = Sha256::new();
    hasher.update(b"Hello, ")?.update(b"no_std ")?.update(b"world!")?;
    hasher.finalize()
}

// Digest written into a fixed buffer, context reused after init()
fn fixed_buffer_example(out: &mut [u8; 64]) -> Result<(), Error> {
    let mut hasher = Sha512_256::new();
    hasher.update(b"first message")?;
    hasher.complete_into(&mut out[..32])?;

    hasher.init();
    hasher.update(b"second message")?;
    hasher.complete_into(&mut out[32..])?;
    Ok(())
}

// Constant-time comparison against a stored digest
fn verify_example(expected: &Digest<32>) -> Result<bool, Error> {
    Sha256::verify(b"Hello, no_std world!", expected)
}

// Digest published as hex, e.g. next to a download
const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn published_digest_example() -> Result<bool, Error> {
    let expected = Digest::<32>::from_hex(ABC_SHA256)?;
    Sha256::verify(b"abc", &expected)
}

fn main() -> Result<(), Error> {
    let digest = streaming_example()?;
    println!("SHA-256:      {}", digest);

    let mut out = [0u8; 64];
    fixed_buffer_example(&mut out)?;
    println!("SHA-512/256:  {}", hex::encode(&out[..32]));
    println!("SHA-512/256:  {}", hex::encode(&out[32..]));

    println!("verified:     {}", verify_example(&digest)?);
    println!("published:    {}", published_digest_example()?);
    Ok(())
}
