// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kernel correctness against the full table of known prime counts.

use prime_sieve::sieve::PrimeSieve;
use prime_sieve::validate::{expected_count, validate};

fn primes_up_to(limit: u64) -> u64 {
    let mut sieve = PrimeSieve::try_new(limit).unwrap();
    sieve.mark_composites();
    sieve.count_primes()
}

#[test]
fn test_all_tabulated_limits() {
    for limit in [
        10u64, 100, 1_000, 10_000, 100_000, 500_000, 1_000_000, 5_000_000, 10_000_000,
    ] {
        let count = primes_up_to(limit);
        let expected = expected_count(limit).unwrap();
        assert_eq!(count, expected, "wrong count for limit {}", limit);
        assert!(validate(limit, count));
    }
}

#[test]
fn test_limit_two_is_just_two() {
    assert_eq!(primes_up_to(2), 1);
}

#[test]
fn test_counts_monotone_across_table() {
    let limits = [10u64, 100, 1_000, 10_000, 100_000, 1_000_000];
    let counts: Vec<u64> = limits.iter().map(|&l| primes_up_to(l)).collect();
    for pair in counts.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_passes_are_idempotent() {
    // Two independent passes over fresh state must agree exactly.
    for limit in [100u64, 10_000, 1_000_000] {
        assert_eq!(primes_up_to(limit), primes_up_to(limit));
    }
}
