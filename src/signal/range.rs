//! Physical scaling of latch output
//! Location: src/signal/range.rs

use crate::config::constants::channel;
use crate::error::{ProgramError, ProgramResult};
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};

use super::Signal;

/// Output bounds `[low, high]` of an analog channel, `low < high`, both finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct VoltageRange {
    low: f64,
    high: f64,
}

impl VoltageRange {
    /// Checked constructor; rejects `high <= low` and non-finite bounds
    pub fn new(low: f64, high: f64) -> ProgramResult<Self> {
        validate_range(low, high)?;
        Ok(Self { low, high })
    }

    /// Lower bound
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `value` lies within the bounds, inclusive
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Smallest range covering both `self` and `value`
    pub fn widened_to(&self, value: f64) -> Self {
        Self {
            low: self.low.min(value),
            high: self.high.max(value),
        }
    }

    /// `[low, high]`
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

impl Default for VoltageRange {
    fn default() -> Self {
        let [low, high] = channel::DEFAULT_ANALOG_RANGE;
        Self { low, high }
    }
}

impl TryFrom<[f64; 2]> for VoltageRange {
    type Error = ProgramError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<VoltageRange> for [f64; 2] {
    fn from(range: VoltageRange) -> Self {
        range.as_array()
    }
}

/// Digital (TTL) or analog (DAC) output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChannelKind {
    /// Binary 0/1 output
    Logical,
    /// Continuous output scaled into `range`
    Analog {
        /// Configured output bounds
        range: VoltageRange,
    },
}

impl ChannelKind {
    /// Analog kind over `[low, high]`
    pub fn analog(low: f64, high: f64) -> ProgramResult<Self> {
        Ok(ChannelKind::Analog {
            range: VoltageRange::new(low, high)?,
        })
    }

    /// Resolve the flat `(range, is_logical)` form; the range is ignored for logical channels
    pub fn from_parts(range: [f64; 2], is_logical: bool) -> ProgramResult<Self> {
        if is_logical {
            Ok(ChannelKind::Logical)
        } else {
            ChannelKind::analog(range[0], range[1])
        }
    }

    /// Whether this is a TTL kind
    pub fn is_logical(&self) -> bool {
        matches!(self, ChannelKind::Logical)
    }

    /// Physical bounds of the output; `[0, 1]` for logical channels
    pub fn range(&self) -> [f64; 2] {
        match self {
            ChannelKind::Logical => [channel::LOGICAL_LOW, channel::LOGICAL_HIGH],
            ChannelKind::Analog { range } => range.as_array(),
        }
    }

    /// Scale a binary signal into this kind's physical range
    pub fn map(&self, binary: &[u8]) -> Signal {
        match self {
            ChannelKind::Logical => binary.iter().map(|&b| f64::from(b)).collect(),
            ChannelKind::Analog { range } => binary
                .iter()
                .map(|&b| f64::from(b) * range.span() + range.low())
                .collect(),
        }
    }
}

/// Scale a binary signal given the flat `(range, is_logical)` description.
///
/// Fails with `InvalidRange` for an analog channel whose `range[1] <= range[0]`.
pub fn map_range(binary: &[u8], range: [f64; 2], is_logical: bool) -> ProgramResult<Signal> {
    Ok(ChannelKind::from_parts(range, is_logical)?.map(binary))
}
