//! Parameter validation for program operations
//!
//! Each check maps a violated precondition straight to the matching
//! [`ProgramError`] so callers can propagate it with `?`.

use crate::config::constants::{channel, program};
use crate::error::{ProgramError, ProgramResult};

/// Cycle count within `[MIN_CYCLES, MAX_CYCLES]`
pub fn validate_cycles(cycles: u32) -> ProgramResult<()> {
    if !(program::MIN_CYCLES..=program::MAX_CYCLES).contains(&cycles) {
        return Err(ProgramError::InvalidCycleCount {
            cycles,
            max: program::MAX_CYCLES,
        });
    }
    Ok(())
}

/// Toggle period of at least one trigger event
pub fn validate_period(period: u32) -> ProgramResult<()> {
    if period < channel::MIN_PERIOD {
        return Err(ProgramError::InvalidPeriod { period });
    }
    Ok(())
}

/// Finite, strictly increasing analog bounds
pub fn validate_range(low: f64, high: f64) -> ProgramResult<()> {
    if !low.is_finite() || !high.is_finite() || high <= low {
        return Err(ProgramError::InvalidRange { low, high });
    }
    Ok(())
}

/// Value writable to a logical channel: exactly 0 or 1
pub fn validate_logical_value(identifier: &str, value: f64) -> ProgramResult<()> {
    if value != channel::LOGICAL_LOW && value != channel::LOGICAL_HIGH {
        return Err(ProgramError::InvalidValue {
            identifier: identifier.to_string(),
            value,
            reason: "logical channels accept only 0 or 1",
        });
    }
    Ok(())
}

/// Value writable to an analog channel: any finite number
pub fn validate_analog_value(identifier: &str, value: f64) -> ProgramResult<()> {
    if !value.is_finite() {
        return Err(ProgramError::InvalidValue {
            identifier: identifier.to_string(),
            value,
            reason: "analog values must be finite",
        });
    }
    Ok(())
}
