// tests/property_streaming.rs
//! Property tests: however a message is split across `update` calls, the
//! digest must equal the one-shot result.
use hashkit_algorithms::hash::sha2::constants::{SHA512_224_H0, SHA512_256_H0};
use hashkit_algorithms::hash::{
    HashFunction, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
};
use proptest::prelude::*;

/// Feed `data` in pieces ending at each (sorted, clamped) cut point
fn streamed<H: HashFunction>(data: &[u8], cuts: &[usize]) -> Vec<u8> {
    let mut points: Vec<usize> = cuts.iter().map(|&c| c % (data.len() + 1)).collect();
    points.sort_unstable();

    let mut hasher = H::new();
    let mut start = 0;
    for end in points {
        hasher.update(&data[start..end]).unwrap();
        start = end;
    }
    hasher.update(&data[start..]).unwrap();
    hasher.finalize().unwrap().as_ref().to_vec()
}

fn one_shot<H: HashFunction>(data: &[u8]) -> Vec<u8> {
    H::digest(data).unwrap().as_ref().to_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_split_invariance_32bit(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        cuts in proptest::collection::vec(any::<usize>(), 0..8),
    ) {
        prop_assert_eq!(streamed::<Sha224>(&data, &cuts), one_shot::<Sha224>(&data));
        prop_assert_eq!(streamed::<Sha256>(&data, &cuts), one_shot::<Sha256>(&data));
    }

    #[test]
    fn prop_split_invariance_64bit(
        data in proptest::collection::vec(any::<u8>(), 0..1200),
        cuts in proptest::collection::vec(any::<usize>(), 0..8),
    ) {
        prop_assert_eq!(streamed::<Sha384>(&data, &cuts), one_shot::<Sha384>(&data));
        prop_assert_eq!(streamed::<Sha512>(&data, &cuts), one_shot::<Sha512>(&data));
        prop_assert_eq!(streamed::<Sha512_224>(&data, &cuts), one_shot::<Sha512_224>(&data));
        prop_assert_eq!(streamed::<Sha512_256>(&data, &cuts), one_shot::<Sha512_256>(&data));
    }

    #[test]
    fn prop_truncated_variants_are_prefixes(
        data in proptest::collection::vec(any::<u8>(), 0..400),
    ) {
        let mut full = Sha512::with_iv(SHA512_256_H0);
        full.update(&data).unwrap();
        let full = full.finalize().unwrap().as_ref().to_vec();
        let truncated = one_shot::<Sha512_256>(&data);
        prop_assert_eq!(&full[..32], &truncated[..]);

        let mut full = Sha512::with_iv(SHA512_224_H0);
        full.update(&data).unwrap();
        let full = full.finalize().unwrap().as_ref().to_vec();
        let truncated = one_shot::<Sha512_224>(&data);
        prop_assert_eq!(&full[..28], &truncated[..]);
    }

    #[test]
    fn prop_reinit_forgets_previous_message(
        first in proptest::collection::vec(any::<u8>(), 0..300),
        second in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut hasher = Sha384::new();
        hasher.update(&first).unwrap();
        hasher.finalize().unwrap();
        hasher.init();
        hasher.update(&second).unwrap();
        let digest = hasher.finalize().unwrap().as_ref().to_vec();
        prop_assert_eq!(digest, one_shot::<Sha384>(&second));
    }
}
