// tests/cross_implementation_tests.rs
//! Cross-checks against the RustCrypto `sha2` crate
use hashkit_algorithms::hash::{
    HashFunction, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
};
use sha2::Digest as _;

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(131) ^ (i >> 3)) as u8).collect()
}

fn check<Ours: HashFunction, Theirs: sha2::Digest>(max_len: usize) {
    for len in 0..=max_len {
        let data = message(len);
        let ours = Ours::digest(&data).unwrap();
        let theirs = Theirs::digest(&data);
        assert_eq!(
            ours.as_ref(),
            theirs.as_slice(),
            "{} differs at length {}",
            Ours::name(),
            len
        );
    }
}

#[test]
fn test_sha224_matches_rustcrypto() {
    check::<Sha224, sha2::Sha224>(300);
}

#[test]
fn test_sha256_matches_rustcrypto() {
    check::<Sha256, sha2::Sha256>(300);
}

#[test]
fn test_sha384_matches_rustcrypto() {
    check::<Sha384, sha2::Sha384>(600);
}

#[test]
fn test_sha512_matches_rustcrypto() {
    check::<Sha512, sha2::Sha512>(600);
}

#[test]
fn test_sha512_224_matches_rustcrypto() {
    check::<Sha512_224, sha2::Sha512_224>(600);
}

#[test]
fn test_sha512_256_matches_rustcrypto() {
    check::<Sha512_256, sha2::Sha512_256>(600);
}

#[test]
fn test_streaming_matches_rustcrypto() {
    let data = message(10_000);
    let mut ours = Sha512::new();
    let mut theirs = sha2::Sha512::new();
    for chunk in data.chunks(97) {
        ours.update(chunk).unwrap();
        theirs.update(chunk);
    }
    assert_eq!(ours.finalize().unwrap().as_ref(), theirs.finalize().as_slice());
}
