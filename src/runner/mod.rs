// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Timed repetition of the sieve kernel.
//!
//! The runner owns the loop and the clock. Each pass constructs a fresh
//! [`PrimeSieve`] (fresh zeroed allocation), runs the marking step, and
//! checks the wall-clock budget afterwards. The loop is do-while shaped:
//! the budget is only consulted after a pass completes, so every run
//! executes at least one pass, even with a zero-second budget.
//!
//! Prime counting happens once, after the loop, against the final pass's
//! state.
//!
//! The clock is `std::time::Instant`, which is monotonic; wall-clock
//! adjustments cannot make a run terminate early or spin forever.

use crate::sieve::{PrimeSieve, SieveError};
use std::time::{Duration, Instant};

/// Default upper limit for the prime search.
pub const DEFAULT_LIMIT: u64 = 1000;

/// Default run duration in seconds.
pub const DEFAULT_SECONDS: u64 = 5;

/// How long the runner repeats the sieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Repeat passes until at least `seconds` of wall-clock time has elapsed.
    Duration { seconds: u64 },
    /// Execute exactly one pass.
    OneShot,
}

/// Immutable configuration for one run, produced once from parsed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Upper limit for the prime search, inclusive. Always `>= 2`.
    pub limit: u64,
    pub mode: RunMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            mode: RunMode::Duration {
                seconds: DEFAULT_SECONDS,
            },
        }
    }
}

/// The outcome of a run: pass throughput plus the final prime count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Completed passes. At least 1 by construction of the loop.
    pub passes: u64,
    /// Wall-clock span from before the first pass to after the last.
    pub elapsed: Duration,
    /// Primes found by the final pass.
    pub prime_count: u64,
}

impl RunResult {
    /// Average wall-clock seconds per pass.
    ///
    /// `passes == 0` cannot occur, but a zero divisor is still guarded:
    /// the derived metric degrades to 0.0 rather than a division panic.
    pub fn seconds_per_pass(&self) -> f64 {
        if self.passes == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() / self.passes as f64
    }
}

/// Run the sieve according to `config` and report the result.
///
/// The only error is allocation failure for the sieve state, surfaced on
/// the first pass that cannot allocate.
pub fn run(config: &RunConfig) -> Result<RunResult, SieveError> {
    let budget = match config.mode {
        RunMode::Duration { seconds } => Some(Duration::from_secs(seconds)),
        RunMode::OneShot => None,
    };

    let mut passes = 0u64;
    let start = Instant::now();

    let final_sieve = loop {
        let mut sieve = PrimeSieve::try_new(config.limit)?;
        sieve.mark_composites();
        passes += 1;

        match budget {
            Some(budget) if start.elapsed() < budget => continue,
            _ => break sieve,
        }
    };
    let elapsed = start.elapsed();

    Ok(RunResult {
        passes,
        elapsed,
        prime_count: final_sieve.count_primes(),
    })
}
