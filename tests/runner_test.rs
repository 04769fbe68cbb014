// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Timed runner behavior: pass counting, do-while guarantee, derived metrics.

use prime_sieve::runner::{self, RunConfig, RunMode};
use std::time::Duration;

#[test]
fn test_oneshot_runs_exactly_once() {
    let config = RunConfig {
        limit: 100_000,
        mode: RunMode::OneShot,
    };
    let result = runner::run(&config).unwrap();
    assert_eq!(result.passes, 1);
    assert_eq!(result.prime_count, 9592);
}

#[test]
fn test_zero_duration_runs_at_least_once() {
    let config = RunConfig {
        limit: 10_000,
        mode: RunMode::Duration { seconds: 0 },
    };
    let result = runner::run(&config).unwrap();
    assert!(result.passes >= 1);
    assert_eq!(result.prime_count, 1229);
}

#[test]
fn test_short_duration_accumulates_passes() {
    // A one-second budget at a tiny limit fits a great many passes; the
    // point is only that the loop keeps going past the first one and the
    // elapsed span covers the budget.
    let config = RunConfig {
        limit: 10,
        mode: RunMode::Duration { seconds: 1 },
    };
    let result = runner::run(&config).unwrap();
    assert!(result.passes > 1);
    assert!(result.elapsed >= Duration::from_secs(1));
    assert_eq!(result.prime_count, 4);
}

#[test]
fn test_seconds_per_pass_consistent_with_fields() {
    let config = RunConfig {
        limit: 1000,
        mode: RunMode::OneShot,
    };
    let result = runner::run(&config).unwrap();
    let expected = result.elapsed.as_secs_f64() / result.passes as f64;
    assert!((result.seconds_per_pass() - expected).abs() < 1e-12);
}
