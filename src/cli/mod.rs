// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line surface: argument parsing, usage text, report formatting.
//!
//! Flags are DOS-style: prefix `/`, single letter, case-insensitive. Parsing
//! is a structured fold over the argument list into an immutable [`Options`],
//! returning a tagged [`ParseOutcome`] so the caller owns all exit-code and
//! printing decisions; nothing here touches stdout or the process state.
//!
//! `/1` (one-shot) and `/d` (dragrace output) are mutually exclusive: the
//! later flag wins and the earlier one is unset, recording a warning for the
//! caller to print.

use crate::runner::{RunConfig, RunMode, RunResult, DEFAULT_LIMIT, DEFAULT_SECONDS};
use crate::validate::{validate, Verdict};
use std::fmt::Write;

/// Warning printed when `/1` and `/d` are both supplied.
const EXCLUSIVE_MSG: &str = "Warning: /1 and /d are mutually exclusive.";

/// Parsed command-line options: the run configuration plus output switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub config: RunConfig,
    /// Emit the machine-parseable dragrace summary line.
    pub dragrace: bool,
    /// Suppress the banner and extraneous text.
    pub quiet: bool,
    /// Warnings accumulated during parsing, for the caller to print.
    pub warnings: Vec<String>,
}

/// Result of parsing the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Arguments were well-formed; run with these options.
    Run(Options),
    /// An explicit help flag was given. Usage text, exit code 0.
    Help,
    /// Unrecognized flag or malformed value. Usage text, exit code 1.
    Error,
}

/// Parse the argument list (without the program name).
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> ParseOutcome {
    let mut limit = DEFAULT_LIMIT;
    let mut seconds = DEFAULT_SECONDS;
    let mut oneshot = false;
    let mut dragrace = false;
    let mut quiet = false;
    let mut warnings = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        let mut chars = arg.chars();
        let flag = match (chars.next(), chars.next(), chars.next()) {
            (Some('/'), Some(letter), None) => letter.to_ascii_lowercase(),
            _ => return ParseOutcome::Error,
        };

        match flag {
            'l' => match iter.next().and_then(|value| parse_limit(value.as_ref())) {
                Some(value) => limit = value,
                None => return ParseOutcome::Error,
            },
            's' => match iter.next().and_then(|value| value.as_ref().parse().ok()) {
                Some(value) => seconds = value,
                None => return ParseOutcome::Error,
            },
            '1' => {
                oneshot = true;
                if dragrace {
                    dragrace = false;
                    warnings.push(format!("{} Selecting oneshot mode.", EXCLUSIVE_MSG));
                }
            }
            'd' => {
                dragrace = true;
                if oneshot {
                    oneshot = false;
                    warnings.push(format!("{} Selecting dragrace mode.", EXCLUSIVE_MSG));
                }
            }
            'q' => quiet = true,
            'h' | '?' => return ParseOutcome::Help,
            _ => return ParseOutcome::Error,
        }
    }

    let mode = if oneshot {
        RunMode::OneShot
    } else {
        RunMode::Duration { seconds }
    };

    ParseOutcome::Run(Options {
        config: RunConfig { limit, mode },
        dragrace,
        quiet,
        warnings,
    })
}

/// A limit must parse and satisfy the kernel's `limit >= 2` precondition.
fn parse_limit(value: &str) -> Option<u64> {
    value.parse().ok().filter(|&limit| limit >= 2)
}

/// The usage text printed for help requests and argument errors.
pub fn usage(program: &str) -> String {
    let mut text = String::new();
    let _ = writeln!(
        text,
        "Usage: {} [/l limit] [/s seconds] [/1|/d] [/q] [/h|/?]",
        program
    );
    text.push_str("Options:\n");
    text.push_str(
        "  /l limit     Specify the upper limit for prime calculation (default: 1000)\n",
    );
    text.push_str(
        "  /s seconds   Specify the target duration in seconds for the run (default: 5)\n",
    );
    text.push_str("  /1           Run the sieve only once (oneshot mode)\n");
    text.push_str("  /d           Also print dragrace format output\n");
    text.push_str("  /q           Suppress banners and extraneous output\n");
    text.push_str("  /h, /?       Print this help message and exit\n");
    text
}

/// The banner shown before a run, unless quiet mode is on.
pub fn banner(config: &RunConfig) -> String {
    let mut text = String::new();
    text.push_str("------------------------------------------------------------\n");
    text.push_str("Sieve of Eratosthenes benchmark, bit-packed odd-only kernel\n");
    text.push_str("------------------------------------------------------------\n\n");
    match config.mode {
        RunMode::OneShot => {
            let _ = write!(text, "Solving primes up to {} for one pass...", config.limit);
        }
        RunMode::Duration { seconds } => {
            let _ = write!(
                text,
                "Solving primes up to {} for {} seconds...",
                config.limit, seconds
            );
        }
    }
    text
}

/// The result report, printed after every run.
pub fn report(config: &RunConfig, result: &RunResult) -> String {
    let verdict = Verdict::from(validate(config.limit, result.prime_count));
    let mut text = String::new();
    let _ = writeln!(
        text,
        "Total time taken      : {:.3} seconds",
        result.elapsed.as_secs_f64()
    );
    let _ = writeln!(text, "Number of passes      : {}", result.passes);
    let _ = writeln!(
        text,
        "Time per pass         : {:.3} seconds",
        result.seconds_per_pass()
    );
    let _ = writeln!(text, "Count of primes found : {}", result.prime_count);
    let _ = writeln!(text, "Prime validator       : {}", verdict);
    text
}

/// The semicolon-delimited summary line for automated benchmark aggregation.
pub fn dragrace_line(result: &RunResult) -> String {
    format!(
        "davepl;{};{:.3};1;algorithm=base,faithful=no;bits=1",
        result.passes,
        result.elapsed.as_secs_f64()
    )
}
