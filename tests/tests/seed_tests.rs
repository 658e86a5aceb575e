//! Integration tests for seed generation

use rand::rngs::OsRng;
use tcrypt_api::entropy::{self, FailingEntropy};
use tcrypt_params::pqc::wots::WOTS_SEED_LEN;
use tcrypt_sign::{Error, Seed};
use tcrypt_tests::{test_rng, CountingEntropy, ZeroEntropy};

#[test]
fn test_default_seed_length() {
    let seed = Seed::random(&mut ZeroEntropy).unwrap();
    assert!(seed.len() >= WOTS_SEED_LEN);
    assert_eq!(seed.len() % 2, 0);
    assert_eq!(seed.as_trytes().as_str(), "9".repeat(82));
}

#[test]
fn test_seed_lengths_round_up_to_even() {
    for min_length in [1usize, 2, 80, 81, 82, 243, 1000] {
        let mut source = CountingEntropy::new();
        let seed = Seed::random_with_length(min_length, &mut source).unwrap();

        assert_eq!(source.requests(), &[min_length.div_ceil(2)]);
        assert!(seed.len() >= min_length);
        assert!(seed.len() <= min_length + 1);
        assert_eq!(seed.len() % 2, 0);
    }
}

#[test]
fn test_seed_expands_bytes_low_digit_first() {
    let mut source = CountingEntropy::new();
    let seed = Seed::random_with_length(8, &mut source).unwrap();
    // Bytes 0, 1, 2, 3
    assert_eq!(seed.as_trytes().as_str(), "99A9B9C9");
}

#[test]
fn test_seeds_from_rng_differ() {
    let mut rng = test_rng(9);
    let a = Seed::random(&mut rng).unwrap();
    let b = Seed::random(&mut rng).unwrap();
    assert_ne!(a, b);

    let mut os = OsRng;
    assert_eq!(Seed::random(&mut os).unwrap().len(), 82);
}

#[test]
fn test_entropy_failure_is_not_retried() {
    let mut calls = 0;
    let result = {
        let mut source = entropy::from_fn(|_| {
            calls += 1;
            Err(tcrypt_api::Error::RandomGenerationError {
                context: "test",
                message: "exhausted".into(),
            })
        });
        Seed::random(&mut source)
    };

    assert_eq!(calls, 1);
    assert_eq!(result.unwrap_err(), Error::Entropy("test: exhausted".into()));
    assert!(matches!(Seed::random(&mut FailingEntropy), Err(Error::Entropy(_))));
}

#[test]
fn test_seed_debug_hides_trytes() {
    let seed = Seed::from_trytes("SECRETSEED").unwrap();
    let printed = format!("{:?}", seed);
    assert!(!printed.contains("SECRET"));
}
