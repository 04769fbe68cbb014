// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! OddBitSet type for bit-packed composite markings.
//!
//! An OddBitSet holds one bit per odd integer in `[1, limit]`, where bit `k`
//! (counting across words from the LSB) stands for the odd number `2k + 1`.
//! A set bit means "known composite"; a cleared bit means "not yet known
//! composite". Even numbers are never represented: the sieve handles them
//! implicitly by only walking odd candidates, with 2 counted separately.
//!
//! # Examples
//!
//! ```
//! use prime_sieve::sieve::OddBitSet;
//!
//! // State for all odd numbers up to 15: 1, 3, 5, 7, 9, 11, 13, 15
//! let mut bits = OddBitSet::try_new(15).unwrap();
//! assert_eq!(bits.bit_count(), 8);
//!
//! bits.mark(9 / 2);   // mark 9 composite
//! bits.mark(15 / 2);  // mark 15 composite
//!
//! assert!(bits.is_marked(9 / 2));
//! assert!(!bits.is_marked(7 / 2));
//! ```

use crate::sieve::SieveError;

/// Bits per backing word.
const WORD_BITS: usize = 64;

/// A bit-packed marking of composite odd numbers.
///
/// Backed by a `Vec<u64>` of `ceil(bit_count / 64)` words, zeroed on
/// construction. Bits only ever transition cleared to set during a pass;
/// there is no per-bit clear. A fresh pass gets a fresh OddBitSet.
///
/// Allocation is fallible so that an oversized limit surfaces as a
/// [`SieveError`] rather than an abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddBitSet {
    words: Vec<u64>,
    bit_count: usize,
}

impl OddBitSet {
    /// Create a zeroed bit set sized for all odd numbers `<= limit`.
    ///
    /// The set holds `limit / 2 + 1` bits: one for each odd number in
    /// `[1, limit]` (for even limits the top bit is simply unused slack,
    /// mirroring the byte-granular sizing of the historical buffer).
    pub fn try_new(limit: u64) -> Result<Self, SieveError> {
        let bit_count = (limit / 2) as usize + 1;
        let word_count = bit_count.div_ceil(WORD_BITS);

        let mut words = Vec::new();
        words
            .try_reserve_exact(word_count)
            .map_err(|_| SieveError::AllocationFailed {
                bytes: word_count * std::mem::size_of::<u64>(),
            })?;
        words.resize(word_count, 0);

        Ok(Self { words, bit_count })
    }

    /// Number of logical bits (one per represented odd number).
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Mark the odd number `2 * index + 1` as composite.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range (a kernel bug, not an input error).
    pub fn mark(&mut self, index: usize) {
        debug_assert!(index < self.bit_count, "bit index {} out of range", index);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Check whether the odd number `2 * index + 1` is marked composite.
    pub fn is_marked(&self, index: usize) -> bool {
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }
}
