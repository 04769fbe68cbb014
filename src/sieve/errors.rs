// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the sieve kernel.

use std::fmt;

/// Errors that can occur while running the sieve.
///
/// The kernel has exactly one failure mode: the bit-packed buffer cannot be
/// allocated. Everything else is pure arithmetic on preconditions the caller
/// upholds (`limit >= 2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// The sieve buffer allocation failed. Fatal; never retried.
    AllocationFailed { bytes: usize },
}

impl fmt::Display for SieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SieveError::AllocationFailed { bytes } => {
                write!(f, "Memory allocation failed ({} bytes for sieve state)", bytes)
            }
        }
    }
}

impl std::error::Error for SieveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_byte_count() {
        let err = SieveError::AllocationFailed { bytes: 4096 };
        assert_eq!(
            format!("{}", err),
            "Memory allocation failed (4096 bytes for sieve state)"
        );
    }
}
