//! Bounds checking for sample ranges
//!
//! Point edits address a half-open sample interval `start..end`; these
//! helpers reject empty or overlong intervals before any sample is touched.

use std::fmt;
use std::ops::Range;

/// Bounds checking error types
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// Interval has `start >= end`
    EmptyRange {
        /// First sample index
        start: usize,
        /// One past the last sample index
        end: usize,
    },
    /// Interval extends past the sequence
    SliceBoundsInvalid {
        /// First sample index
        start: usize,
        /// One past the last sample index
        end: usize,
        /// Sequence length
        length: usize,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::EmptyRange { start, end } => {
                write!(f, "Sample range [{}..{}] is empty", start, end)
            }
            BoundsError::SliceBoundsInvalid { start, end, length } => {
                write!(f, "Slice bounds [{}..{}] invalid for length {}", start, end, length)
            }
        }
    }
}

impl std::error::Error for BoundsError {}

/// Result type for bounds checking operations
pub type BoundsResult<T> = Result<T, BoundsError>;

/// Check that `range` is non-empty and lies within a sequence of `length`
pub fn check_sample_range(range: &Range<usize>, length: usize) -> BoundsResult<()> {
    if range.start >= range.end {
        return Err(BoundsError::EmptyRange {
            start: range.start,
            end: range.end,
        });
    }
    if range.end > length {
        return Err(BoundsError::SliceBoundsInvalid {
            start: range.start,
            end: range.end,
            length,
        });
    }
    Ok(())
}
