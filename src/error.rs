// src/error.rs
//! Unified error handling for trigsync-core
//!
//! Program operations fail with [`ProgramError`], configuration loading with
//! [`ConfigError`]. Both fold into [`SyncError`] for callers that drive a
//! program straight from a configuration file.
//!
//! Every program error is a local validation failure: the operation that
//! returned it left the [`Program`](crate::program::Program) untouched.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

pub use crate::config::loader::ConfigError;

/// Errors returned by signal synthesis and program mutation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProgramError {
    /// Cycle count is zero or above the supported maximum
    #[error("Invalid cycle count {cycles}: must be in [1, {max}]")]
    InvalidCycleCount {
        /// Requested cycles
        cycles: u32,
        /// Largest accepted cycle count
        max: u32,
    },

    /// Toggle period is zero
    #[error("Invalid period {period}: must be a positive integer")]
    InvalidPeriod {
        /// Requested period
        period: u32,
    },

    /// Analog range is empty, inverted or not finite
    #[error("Invalid range [{low}, {high}]: high must be strictly greater than low and both finite")]
    InvalidRange {
        /// Requested lower bound
        low: f64,
        /// Requested upper bound
        high: f64,
    },

    /// Edit value not representable on the channel
    #[error("Invalid value {value} for '{identifier}': {reason}")]
    InvalidValue {
        /// Edited record
        identifier: String,
        /// Rejected value
        value: f64,
        /// Accepted values for the channel
        reason: &'static str,
    },

    /// Sample range empty or past the end of the signal
    #[error("Sample range {start}..{end} out of bounds for '{identifier}' with {n_points} points")]
    IndexOutOfRange {
        /// Edited record
        identifier: String,
        /// First sample index
        start: usize,
        /// One past the last sample index
        end: usize,
        /// Record length
        n_points: usize,
    },

    /// Identifier already present in the program
    #[error("Identifier '{0}' already exists in the program")]
    DuplicateIdentifier(String),

    /// Identifier not present in the program
    #[error("No record with identifier '{0}'")]
    NotFound(String),

    /// Operation not permitted on the trigger record
    #[error("Record '{identifier}' is protected: {operation} not allowed")]
    ProtectedRecord {
        /// Protected record
        identifier: String,
        /// Attempted operation
        operation: &'static str,
    },

    /// Identifier malformed or inconsistent with the channel kind
    #[error("Invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        /// Identifier as given
        identifier: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

/// Discriminant of [`ProgramError`] for matching without destructuring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramErrorKind {
    /// [`ProgramError::InvalidCycleCount`]
    InvalidCycleCount,
    /// [`ProgramError::InvalidPeriod`]
    InvalidPeriod,
    /// [`ProgramError::InvalidRange`]
    InvalidRange,
    /// [`ProgramError::InvalidValue`]
    InvalidValue,
    /// [`ProgramError::IndexOutOfRange`]
    IndexOutOfRange,
    /// [`ProgramError::DuplicateIdentifier`]
    DuplicateIdentifier,
    /// [`ProgramError::NotFound`]
    NotFound,
    /// [`ProgramError::ProtectedRecord`]
    ProtectedRecord,
    /// [`ProgramError::InvalidIdentifier`]
    InvalidIdentifier,
}

impl ProgramError {
    /// Error kind without payload
    pub fn kind(&self) -> ProgramErrorKind {
        match self {
            ProgramError::InvalidCycleCount { .. } => ProgramErrorKind::InvalidCycleCount,
            ProgramError::InvalidPeriod { .. } => ProgramErrorKind::InvalidPeriod,
            ProgramError::InvalidRange { .. } => ProgramErrorKind::InvalidRange,
            ProgramError::InvalidValue { .. } => ProgramErrorKind::InvalidValue,
            ProgramError::IndexOutOfRange { .. } => ProgramErrorKind::IndexOutOfRange,
            ProgramError::DuplicateIdentifier(_) => ProgramErrorKind::DuplicateIdentifier,
            ProgramError::NotFound(_) => ProgramErrorKind::NotFound,
            ProgramError::ProtectedRecord { .. } => ProgramErrorKind::ProtectedRecord,
            ProgramError::InvalidIdentifier { .. } => ProgramErrorKind::InvalidIdentifier,
        }
    }

    /// Parameter precondition violated by the caller
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self.kind(),
            ProgramErrorKind::InvalidCycleCount
                | ProgramErrorKind::InvalidPeriod
                | ProgramErrorKind::InvalidRange
                | ProgramErrorKind::InvalidValue
                | ProgramErrorKind::IndexOutOfRange
        )
    }

    /// Identifier invariant of the program violated
    pub fn is_structural_error(&self) -> bool {
        !self.is_parameter_error()
    }

    pub(crate) fn out_of_range(identifier: &str, range: &Range<usize>, n_points: usize) -> Self {
        ProgramError::IndexOutOfRange {
            identifier: identifier.to_string(),
            start: range.start,
            end: range.end,
            n_points,
        }
    }
}

/// Crate-level error union
#[derive(Error, Debug)]
pub enum SyncError {
    /// Program operation failed
    #[error("[PROGRAM] {0}")]
    Program(#[from] ProgramError),

    /// Configuration loading or validation failed
    #[error("[CONFIG] {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for program operations
pub type ProgramResult<T> = Result<T, ProgramError>;

/// Result alias for crate-level operations
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        let err = ProgramError::InvalidPeriod { period: 0 };
        assert_eq!(err.kind(), ProgramErrorKind::InvalidPeriod);
        assert!(err.is_parameter_error());

        let err = ProgramError::ProtectedRecord {
            identifier: "trigger".to_string(),
            operation: "remove",
        };
        assert_eq!(err.kind(), ProgramErrorKind::ProtectedRecord);
        assert!(err.is_structural_error());
    }

    #[test]
    fn test_error_display() {
        let err = ProgramError::out_of_range("DAC1", &(4..12), 10);
        let display = format!("{}", err);
        assert!(display.contains("DAC1"));
        assert!(display.contains("4..12"));
        assert!(display.contains("10 points"));
    }

    #[test]
    fn test_sync_error_conversion() {
        let err: SyncError = ProgramError::NotFound("TTL9".to_string()).into();
        match err {
            SyncError::Program(inner) => assert_eq!(inner.kind(), ProgramErrorKind::NotFound),
            _ => panic!("Expected program error"),
        }

        let err: SyncError = ConfigError::FileNotFound("missing.toml".to_string()).into();
        assert!(format!("{}", err).starts_with("[CONFIG]"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProgramError>();
        assert_send_sync::<SyncError>();
    }
}
