// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sieve of Eratosthenes throughput benchmark.
//!
//! Computes primes up to a configurable limit with a bit-packed odd-only
//! sieve, repeating the computation against a wall-clock budget (or exactly
//! once) to measure passes per run.
//!
//! # Architecture
//!
//! Two components, evaluated leaf-first:
//!
//! ## Sieve Kernel ([`sieve`])
//!
//! Pure and deterministic. A [`PrimeSieve`] owns a bit-packed marking of
//! composite odd numbers for exactly one pass: fresh zeroed allocation at
//! pass start, marking step, optional counting step, drop.
//!
//! ## Timed Runner ([`runner`])
//!
//! Owns the loop and the monotonic clock. Repeats kernel passes until the
//! configured duration elapses (do-while, so always at least one pass), or
//! runs exactly one pass in one-shot mode, then counts primes once on the
//! final state.
//!
//! The [`validate`] table cross-checks the final count against known results
//! for well-known limits; the [`cli`] module is thin I/O glue around these.

pub mod cli;
pub mod runner;
pub mod sieve;
pub mod validate;

// Re-export commonly used types
pub use runner::{RunConfig, RunMode, RunResult};
pub use sieve::{PrimeSieve, SieveError};
