// src/config/mod.rs
//! Program configuration: cycle count and per-channel definitions

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::{ConfigError, ConfigLoader};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::ProgramResult;
use crate::program::{ChannelId, ChannelParams, Program};
use crate::signal::TriggerMode;
use crate::utils::validation::{validate_period, validate_range};

/// Complete description of a signal program
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProgramConfig {
    /// Trigger cycles; the program has `2 * cycles` samples
    #[serde(default = "defaults::cycles")]
    pub cycles: u32,

    /// Mode for channels that do not name their own
    #[serde(default)]
    pub default_trigger_mode: TriggerMode,

    /// Channels in creation order
    #[serde(default)]
    pub channels: Vec<ChannelConfig>,
}

/// One TTL/DAC channel as supplied by a front end
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChannelConfig {
    /// `TTL{n}` or `DAC{n}`
    pub identifier: String,

    /// Free-form label
    #[serde(default)]
    pub alias: String,

    /// Trigger occurrences between toggles
    #[serde(default = "defaults::period")]
    pub period: u32,

    /// Whether sample 0 is high
    #[serde(default = "defaults::in_phase")]
    pub in_phase: bool,

    /// TTL (`true`) or DAC (`false`)
    #[serde(default = "defaults::is_logical")]
    pub is_logical: bool,

    /// Ignored for logical channels
    #[serde(default = "defaults::range")]
    pub range: [f64; 2],

    /// Overrides the program's default trigger mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_mode: Option<TriggerMode>,
}

/// Default value providers using constants
mod defaults {
    use crate::config::constants::*;

    pub fn cycles() -> u32 { program::DEFAULT_CYCLES }
    pub fn period() -> u32 { channel::DEFAULT_PERIOD }
    pub fn in_phase() -> bool { channel::DEFAULT_IN_PHASE }
    pub fn is_logical() -> bool { true }
    pub fn range() -> [f64; 2] { channel::DEFAULT_ANALOG_RANGE }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            cycles: defaults::cycles(),
            default_trigger_mode: TriggerMode::default(),
            channels: Vec::new(),
        }
    }
}

/// A single configuration violation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Dotted path of the offending field
    pub field: String,
    /// What is wrong with it
    pub message: String,
    /// Offending value as written
    pub value: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error for '{}': {} (value: {})", self.field, self.message, self.value)
    }
}

impl std::error::Error for ValidationError {}

impl ChannelConfig {
    /// Logical channel with default phase and mode
    pub fn ttl(identifier: &str, alias: &str, period: u32) -> Self {
        Self {
            identifier: identifier.to_string(),
            alias: alias.to_string(),
            period,
            in_phase: defaults::in_phase(),
            is_logical: true,
            range: defaults::range(),
            trigger_mode: None,
        }
    }

    /// Analog channel over `range` with default phase and mode
    pub fn dac(identifier: &str, alias: &str, period: u32, range: [f64; 2]) -> Self {
        Self {
            is_logical: false,
            range,
            ..Self::ttl(identifier, alias, period)
        }
    }

    /// Resolve to generation parameters, falling back to `default_mode`
    pub fn params(&self, default_mode: TriggerMode) -> ProgramResult<ChannelParams> {
        ChannelParams::from_parts(
            self.period,
            self.in_phase,
            self.range,
            self.is_logical,
            self.trigger_mode.unwrap_or(default_mode),
        )
    }
}

impl ProgramConfig {
    /// Collect every violation instead of stopping at the first
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(program::MIN_CYCLES..=program::MAX_CYCLES).contains(&self.cycles) {
            errors.push(ValidationError::new(
                "cycles",
                format!("must be in [{}, {}]", program::MIN_CYCLES, program::MAX_CYCLES),
                self.cycles,
            ));
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.channels.iter().enumerate() {
            let field = |name: &str| format!("channels[{}].{}", index, name);

            match entry.identifier.parse::<ChannelId>() {
                Ok(ChannelId::Trigger) => errors.push(ValidationError::new(
                    field("identifier"),
                    "the trigger record is implicit",
                    &entry.identifier,
                )),
                Ok(id) => {
                    if !seen.insert(id) {
                        errors.push(ValidationError::new(
                            field("identifier"),
                            "duplicate identifier",
                            &entry.identifier,
                        ));
                    }
                    let logical_id = matches!(id, ChannelId::Ttl(_));
                    if logical_id != entry.is_logical {
                        errors.push(ValidationError::new(
                            field("is_logical"),
                            "TTL channels must be logical and DAC channels analog",
                            entry.is_logical,
                        ));
                    }
                }
                Err(err) => errors.push(ValidationError::new(
                    field("identifier"),
                    err.to_string(),
                    &entry.identifier,
                )),
            }

            if let Err(err) = validate_period(entry.period) {
                errors.push(ValidationError::new(field("period"), err.to_string(), entry.period));
            }

            let [low, high] = entry.range;
            if !entry.is_logical {
                if let Err(err) = validate_range(low, high) {
                    errors.push(ValidationError::new(
                        field("range"),
                        err.to_string(),
                        format!("[{}, {}]", low, high),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the program: trigger first, then channels in declaration order
    pub fn build(&self) -> ProgramResult<Program> {
        let mut program = Program::new(self.cycles)?;
        for entry in &self.channels {
            let params = entry.params(self.default_trigger_mode)?;
            program.add_channel(&entry.identifier, &entry.alias, params)?;
        }
        Ok(program)
    }
}
