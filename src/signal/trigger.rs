//! Master trigger waveform and trigger interpretation modes
//! Location: src/signal/trigger.rs

use crate::config::constants::program;
use crate::error::ProgramResult;
use crate::utils::validation::validate_cycles;
use serde::{Deserialize, Serialize};

use super::Signal;

/// Which samples of the trigger waveform count as a trigger occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Low to high transition
    RisingEdge,
    /// High to low transition
    FallingEdge,
    /// Any transition
    #[default]
    Change,
    /// Every sample while high
    LevelHigh,
    /// Every sample while low
    LevelLow,
}

impl TriggerMode {
    /// All modes in declaration order
    pub const ALL: [TriggerMode; 5] = [
        TriggerMode::RisingEdge,
        TriggerMode::FallingEdge,
        TriggerMode::Change,
        TriggerMode::LevelHigh,
        TriggerMode::LevelLow,
    ];

    /// Whether `current`, preceded by `previous`, is an occurrence under this mode
    #[inline]
    pub fn is_occurrence(self, previous: bool, current: bool) -> bool {
        match self {
            TriggerMode::RisingEdge => !previous && current,
            TriggerMode::FallingEdge => previous && !current,
            TriggerMode::Change => previous != current,
            TriggerMode::LevelHigh => current,
            TriggerMode::LevelLow => !current,
        }
    }
}

impl std::fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TriggerMode::RisingEdge => "rising_edge",
            TriggerMode::FallingEdge => "falling_edge",
            TriggerMode::Change => "change",
            TriggerMode::LevelHigh => "level_high",
            TriggerMode::LevelLow => "level_low",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for TriggerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriggerMode::ALL
            .into_iter()
            .find(|mode| mode.to_string() == s)
            .ok_or_else(|| format!("unknown trigger mode '{}'", s))
    }
}

/// Logic level of a trigger sample
#[inline]
pub fn is_high(sample: f64) -> bool {
    sample != 0.0
}

/// Sample count of a trigger with `cycles` cycles
pub fn trigger_len(cycles: u32) -> usize {
    cycles as usize * program::SAMPLES_PER_CYCLE
}

/// Generate the trigger waveform: `2 * cycles` samples alternating 1, 0, 1, 0, ...
pub fn generate_trigger(cycles: u32) -> ProgramResult<Signal> {
    validate_cycles(cycles)?;

    let signal: Signal = (0..trigger_len(cycles))
        .map(|i| if i % 2 == 0 { 1.0 } else { 0.0 })
        .collect();

    tracing::trace!(cycles, n_points = signal.len(), "generated trigger");
    Ok(signal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProgramError;

    #[test]
    fn test_trigger_three_cycles() {
        let trigger = generate_trigger(3).unwrap();
        assert_eq!(trigger, vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_single_cycle() {
        assert_eq!(generate_trigger(1).unwrap(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_zero_cycles_rejected() {
        let err = generate_trigger(0).unwrap_err();
        assert!(matches!(err, ProgramError::InvalidCycleCount { cycles: 0, .. }));
    }

    #[test]
    fn test_too_many_cycles_rejected() {
        assert!(generate_trigger(program::MAX_CYCLES + 1).is_err());
    }

    #[test]
    fn test_mode_occurrence_table() {
        use TriggerMode::*;
        assert!(RisingEdge.is_occurrence(false, true));
        assert!(!RisingEdge.is_occurrence(true, false));
        assert!(FallingEdge.is_occurrence(true, false));
        assert!(!FallingEdge.is_occurrence(false, false));
        assert!(Change.is_occurrence(true, false));
        assert!(Change.is_occurrence(false, true));
        assert!(!Change.is_occurrence(true, true));
        assert!(LevelHigh.is_occurrence(true, true));
        assert!(!LevelHigh.is_occurrence(true, false));
        assert!(LevelLow.is_occurrence(false, false));
    }

    #[test]
    fn test_mode_parse_roundtrip() {
        for mode in TriggerMode::ALL {
            assert_eq!(mode.to_string().parse::<TriggerMode>().unwrap(), mode);
        }
        assert!("sideways".parse::<TriggerMode>().is_err());
    }
}
