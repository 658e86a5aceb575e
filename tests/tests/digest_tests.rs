//! Integration tests for signing key digest derivation

use tcrypt_algorithms::{Curl, CurlP27, Sponge, TryteString};
use tcrypt_sign::pq::wots::{KeyDigestDeriver, SigningKey, WotsParams};
use tcrypt_sign::Error;
use tcrypt_tests::vectors::*;
use tcrypt_tests::{pattern_key, repeat_trytes, trytes_of, SingleFragmentParams};

#[test]
fn test_curl_known_answers() {
    let input = repeat_trytes(FORWARD_PATTERN, 81).as_trits();
    assert_eq!(trytes_of(&Curl::hash(&input).unwrap()), CURL_P81_FORWARD);
    assert_eq!(trytes_of(&CurlP27::hash(&input).unwrap()), CURL_P27_FORWARD);
}

#[test]
fn test_tryte_encoding_known_answer() {
    let trytes = TryteString::from_bytes(b"Hello, IOTA!");
    assert_eq!(trytes.as_str(), HELLO_TRYTES);
    assert_eq!(trytes.decode().unwrap(), b"Hello, IOTA!");
}

#[test]
fn test_fragment_chain_known_answer() {
    let fragment = repeat_trytes(FORWARD_PATTERN, 81).as_trits();
    let chained = KeyDigestDeriver::<Curl, WotsParams>::chain_fragment(&fragment).unwrap();
    assert_eq!(trytes_of(&chained), CHAIN_FORWARD);
}

#[test]
fn test_single_block_golden_digests() {
    let zero: SigningKey = pattern_key("9", 1);
    assert_eq!(trytes_of(&zero.get_digest_trits().unwrap()), DIGEST_ZERO_BLOCK);

    let forward: SigningKey = pattern_key(FORWARD_PATTERN, 1);
    assert_eq!(trytes_of(&forward.get_digest_trits().unwrap()), DIGEST_FORWARD_BLOCK);

    let reverse: SigningKey = pattern_key(REVERSE_PATTERN, 1);
    assert_eq!(trytes_of(&reverse.get_digest_trits().unwrap()), DIGEST_REVERSE_BLOCK);
}

#[test]
fn test_two_block_digest_is_per_block() {
    let mut trytes = repeat_trytes(FORWARD_PATTERN, 2187).as_str().to_owned();
    trytes.push_str(repeat_trytes(REVERSE_PATTERN, 2187).as_str());

    let key: SigningKey = SigningKey::from_trytes(&trytes).unwrap();
    assert_eq!(key.block_count(), 2);

    let digest = key.get_digest_trits().unwrap();
    assert_eq!(digest.len(), 2 * 243);
    assert_eq!(trytes_of(&digest[..243]), DIGEST_FORWARD_BLOCK);
    assert_eq!(trytes_of(&digest[243..]), DIGEST_REVERSE_BLOCK);
}

#[test]
fn test_digest_is_deterministic() {
    let key: SigningKey = pattern_key(REVERSE_PATTERN, 1);
    let copy = key.clone();
    assert_eq!(key, copy);
    assert_eq!(key.get_digest_trits().unwrap(), copy.get_digest_trits().unwrap());
}

#[test]
fn test_single_trit_flip_changes_digest() {
    let key: SigningKey = pattern_key(FORWARD_PATTERN, 1);
    let mut trits = key.as_trits().to_vec();
    // Flip a trit in the last fragment
    trits[6000] = if trits[6000] == 1 { 0 } else { 1 };
    let flipped: SigningKey = SigningKey::from_trits(&trits).unwrap();

    assert_ne!(key.get_digest_trits().unwrap(), flipped.get_digest_trits().unwrap());
}

#[test]
fn test_one_tryte_short_key_is_rejected() {
    let short = repeat_trytes(FORWARD_PATTERN, 2186);
    match SigningKey::<WotsParams>::new(short) {
        Err(Error::InvalidBlockLength { block_len, actual }) => {
            assert_eq!(block_len, 2187);
            assert_eq!(actual, 2186);
        }
        other => panic!("Expected InvalidBlockLength, got {:?}", other),
    }
}

#[test]
fn test_digest_length_scales_with_blocks() {
    for blocks in 0..4 {
        let key: SigningKey<SingleFragmentParams> = pattern_key(FORWARD_PATTERN, blocks);
        assert_eq!(key.block_count(), blocks);
        assert_eq!(key.get_digest_trits().unwrap().len(), blocks * 243);
    }
}

#[test]
fn test_errors_convert_to_api_error() {
    let err = SigningKey::<WotsParams>::from_trytes("ABC").unwrap_err();
    let api: tcrypt_api::Error = err.into();
    assert!(matches!(api, tcrypt_api::Error::InvalidKey { .. }));
}
