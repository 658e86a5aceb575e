//! Property-based tests for seed generation and digest derivation

use proptest::prelude::*;
use tcrypt_algorithms::{Curl, Trit};
use tcrypt_sign::pq::wots::{KeyDigestDeriver, Seed, SigningKey, WotsParams};
use tcrypt_sign::Error;
use tcrypt_tests::{CountingEntropy, SingleFragmentParams};

type SmallDeriver = KeyDigestDeriver<Curl, SingleFragmentParams>;

fn trit() -> impl Strategy<Value = Trit> {
    prop_oneof![Just(-1i8), Just(0i8), Just(1i8)]
}

/// Trits for `1..=max_blocks` single-fragment blocks
fn small_key_trits(max_blocks: usize) -> impl Strategy<Value = Vec<Trit>> {
    (1..=max_blocks).prop_flat_map(|blocks| prop::collection::vec(trit(), blocks * 243))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn digest_length_is_one_hash_per_block(trits in small_key_trits(3)) {
        let key = SigningKey::<SingleFragmentParams>::from_trits(&trits).unwrap();
        let digest = key.get_digest_trits().unwrap();
        prop_assert_eq!(digest.len(), key.block_count() * 243);
    }

    #[test]
    fn digest_is_deterministic(trits in small_key_trits(2)) {
        prop_assert_eq!(SmallDeriver::derive(&trits).unwrap(), SmallDeriver::derive(&trits).unwrap());
    }

    #[test]
    fn blocks_are_digested_independently(trits in small_key_trits(3)) {
        let digest = SmallDeriver::derive(&trits).unwrap();
        for (block, segment) in trits.chunks(243).zip(digest.chunks(243)) {
            prop_assert_eq!(SmallDeriver::block_digest(block).unwrap(), segment.to_vec());
        }
    }

    #[test]
    fn single_trit_change_changes_digest(
        trits in small_key_trits(1),
        position in 0usize..243,
        delta in 1i8..=2,
    ) {
        let mut changed = trits.clone();
        // Rotate the trit through the other two values
        changed[position] = (changed[position] + 1 + delta) % 3 - 1;
        prop_assert_ne!(&changed, &trits);
        prop_assert_ne!(SmallDeriver::derive(&changed).unwrap(), SmallDeriver::derive(&trits).unwrap());
    }

    #[test]
    fn partial_blocks_are_rejected(extra in 1usize..243, blocks in 0usize..3) {
        let trits = vec![0; blocks * 243 + extra];
        let is_block_error = matches!(
            SmallDeriver::derive(&trits),
            Err(Error::InvalidBlockLength { .. })
        );
        prop_assert!(is_block_error);
    }

    #[test]
    fn seed_length_covers_request(min_length in 0usize..500) {
        let seed = Seed::random_with_length(min_length, &mut CountingEntropy::new()).unwrap();
        prop_assert!(seed.len() >= min_length);
        prop_assert!(seed.len() - min_length <= 1);
        prop_assert_eq!(seed.len() % 2, 0);
    }
}

proptest! {
    // Full-size blocks cost 703 Curl-P-81 calls each
    #![proptest_config(ProptestConfig::with_cases(2))]

    #[test]
    fn full_block_trit_change_changes_digest(position in 0usize..6561) {
        let trits = vec![0i8; 6561];
        let mut changed = trits.clone();
        changed[position] = 1;

        let key = SigningKey::<WotsParams>::from_trits(&trits).unwrap();
        let other = SigningKey::<WotsParams>::from_trits(&changed).unwrap();
        prop_assert_ne!(key.get_digest_trits().unwrap(), other.get_digest_trits().unwrap());
    }

    #[test]
    fn short_keys_are_rejected(len in 1usize..2187) {
        let trytes = "9".repeat(len);
        let is_block_error = matches!(
            SigningKey::<WotsParams>::from_trytes(&trytes),
            Err(Error::InvalidBlockLength { block_len: 2187, .. })
        );
        prop_assert!(is_block_error);
    }
}
