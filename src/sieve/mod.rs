// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sieve of Eratosthenes kernel, odd-only and bit-packed.
//!
//! A [`PrimeSieve`] owns the state for exactly one pass: it is constructed
//! with a fresh zeroed [`OddBitSet`], marked once, counted at most once, and
//! dropped. The timed runner enforces this one-pass lifetime by building a
//! new sieve for every pass.
//!
//! The kernel is pure and deterministic: no I/O, no clock, no shared state.
//!
//! # Algorithm
//!
//! Standard odd-only sieve. Only odd numbers are represented in the bit
//! state; 2 is accounted for as a constant when counting. For each odd
//! candidate `i` from 3 while `i * i <= limit`, if `i` is still unmarked,
//! every odd multiple of `i` from `i * i` up to `limit` is marked composite,
//! stepping by `2 * i` (the even multiples are not represented at all).
//!
//! # Examples
//!
//! ```
//! use prime_sieve::sieve::PrimeSieve;
//!
//! let mut sieve = PrimeSieve::try_new(1000).unwrap();
//! sieve.mark_composites();
//! assert_eq!(sieve.count_primes(), 168);
//! ```

pub mod bitset;
pub mod errors;

pub use bitset::OddBitSet;
pub use errors::SieveError;

/// One pass of the odd-only Sieve of Eratosthenes.
///
/// All limit and index arithmetic is `u64`, so `i * i` intermediates are
/// exact for every limit this tool targets (10,000,000 and far beyond).
///
/// The kernel assumes `limit >= 2`; the CLI layer rejects anything smaller
/// before a sieve is ever constructed.
#[derive(Debug)]
pub struct PrimeSieve {
    limit: u64,
    bits: OddBitSet,
}

impl PrimeSieve {
    /// Allocate zeroed sieve state for all odd numbers `<= limit`.
    pub fn try_new(limit: u64) -> Result<Self, SieveError> {
        let bits = OddBitSet::try_new(limit)?;
        Ok(Self { limit, bits })
    }

    /// The upper limit this pass searches to, inclusive.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Mark every composite odd number `<= limit`.
    pub fn mark_composites(&mut self) {
        let mut i = 3u64;
        while i * i <= self.limit {
            if !self.bits.is_marked((i / 2) as usize) {
                let mut j = i * i;
                while j <= self.limit {
                    self.bits.mark((j / 2) as usize);
                    j += 2 * i;
                }
            }
            i += 2;
        }
    }

    /// Count the primes found by this pass.
    ///
    /// Starts at 1 for the prime 2, then counts every unmarked odd number
    /// in `[3, limit]`. Meaningful only after [`mark_composites`]; on an
    /// unmarked state it counts every odd number plus one.
    ///
    /// [`mark_composites`]: PrimeSieve::mark_composites
    pub fn count_primes(&self) -> u64 {
        let mut count = 1u64; // 2 is a prime number
        let mut i = 3u64;
        while i <= self.limit {
            if !self.bits.is_marked((i / 2) as usize) {
                count += 1;
            }
            i += 2;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes_up_to(limit: u64) -> u64 {
        let mut sieve = PrimeSieve::try_new(limit).unwrap();
        sieve.mark_composites();
        sieve.count_primes()
    }

    #[test]
    fn test_smallest_limits() {
        assert_eq!(primes_up_to(2), 1); // just {2}
        assert_eq!(primes_up_to(3), 2); // {2, 3}
        assert_eq!(primes_up_to(4), 2);
        assert_eq!(primes_up_to(5), 3);
        assert_eq!(primes_up_to(7), 4);
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(primes_up_to(10), 4);
        assert_eq!(primes_up_to(100), 25);
        assert_eq!(primes_up_to(1000), 168);
        assert_eq!(primes_up_to(10000), 1229);
    }

    #[test]
    fn test_limit_on_square_boundary() {
        // 49 = 7 * 7 must be marked: the candidate loop runs while i*i <= limit.
        assert_eq!(primes_up_to(48), 15);
        assert_eq!(primes_up_to(49), 15);
        assert_eq!(primes_up_to(50), 15);
        assert_eq!(primes_up_to(53), 16);
    }

    #[test]
    fn test_prime_limit_is_counted() {
        // The limit itself, when prime and odd, is included.
        assert_eq!(primes_up_to(97), 25);
        assert_eq!(primes_up_to(96), 24);
    }

    #[test]
    fn test_count_monotone_in_limit() {
        let mut previous = 0;
        for limit in 2..500 {
            let count = primes_up_to(limit);
            assert!(
                count >= previous,
                "count dropped from {} to {} at limit {}",
                previous,
                count,
                limit
            );
            previous = count;
        }
    }
}
