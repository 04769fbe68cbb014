// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Advisory self-check of prime counts against known results.
//!
//! A fixed table maps well-known limits to their exact prime counts.
//! Validation is purely informational: an untabulated limit or a mismatch
//! yields [`Verdict::Fail`], never an error, and the result does not alter
//! control flow anywhere.

use strum::Display;

/// Known (limit, prime count) pairs, sorted by limit for binary search.
const EXPECTED_COUNTS: &[(u64, u64)] = &[
    (10, 4),
    (100, 25),
    (1_000, 168),
    (10_000, 1_229),
    (100_000, 9_592),
    (500_000, 41_538),
    (1_000_000, 78_498),
    (5_000_000, 348_513),
    (10_000_000, 664_579),
];

/// Outcome of the self-check, rendered as `PASS`/`FAIL` in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[strum(serialize = "PASS")]
    Pass,
    #[strum(serialize = "FAIL")]
    Fail,
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// The tabulated prime count for `limit`, if `limit` is a known entry.
pub fn expected_count(limit: u64) -> Option<u64> {
    EXPECTED_COUNTS
        .binary_search_by_key(&limit, |&(l, _)| l)
        .ok()
        .map(|index| EXPECTED_COUNTS[index].1)
}

/// Check `prime_count` against the table.
///
/// True only when `limit` is tabulated and the counts match exactly.
pub fn validate(limit: u64, prime_count: u64) -> bool {
    expected_count(limit) == Some(prime_count)
}
