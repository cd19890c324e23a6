//! Channel signal records
//! Location: src/program/record.rs

use crate::config::constants::{channel, identifiers};
use crate::error::ProgramResult;
use crate::signal::{synthesize, ChannelKind, Signal, TriggerMode};
use serde::{Deserialize, Serialize};

use super::identifier::ChannelId;

/// Generation parameters of a channel, kept so the channel can be resynthesized
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelParams {
    /// Trigger occurrences between toggles
    pub period: u32,
    /// Whether sample 0 is high
    pub in_phase: bool,
    /// Logical, or analog with its configured range
    pub kind: ChannelKind,
    /// Which trigger samples count as occurrences
    pub mode: TriggerMode,
}

impl ChannelParams {
    /// TTL channel parameters
    pub fn logical(period: u32, in_phase: bool, mode: TriggerMode) -> Self {
        Self {
            period,
            in_phase,
            kind: ChannelKind::Logical,
            mode,
        }
    }

    /// DAC channel parameters over `[low, high]`
    pub fn analog(
        period: u32,
        in_phase: bool,
        low: f64,
        high: f64,
        mode: TriggerMode,
    ) -> ProgramResult<Self> {
        Ok(Self {
            period,
            in_phase,
            kind: ChannelKind::analog(low, high)?,
            mode,
        })
    }

    /// Parameters from the flat `(period, in_phase, range, is_logical, mode)` tuple
    pub fn from_parts(
        period: u32,
        in_phase: bool,
        range: [f64; 2],
        is_logical: bool,
        mode: TriggerMode,
    ) -> ProgramResult<Self> {
        Ok(Self {
            period,
            in_phase,
            kind: ChannelKind::from_parts(range, is_logical)?,
            mode,
        })
    }

    /// Parameters describing the trigger record itself
    pub(crate) fn trigger() -> Self {
        Self::logical(channel::DEFAULT_PERIOD, true, TriggerMode::Change)
    }

    /// Whether these parameters describe a TTL channel
    pub fn is_logical(&self) -> bool {
        self.kind.is_logical()
    }

    /// Run the synthesis chain against `trigger`
    pub fn synthesize(&self, trigger: &[f64]) -> ProgramResult<Signal> {
        synthesize(trigger, self.period, self.in_phase, &self.kind, self.mode)
    }
}

/// One channel of a program: identity, label, generation parameters and samples
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRecord {
    id: ChannelId,
    alias: String,
    params: ChannelParams,
    /// Current bounds; grows past `params.kind`'s range under analog point edits
    range: [f64; 2],
    signal: Signal,
}

impl SignalRecord {
    pub(crate) fn new(id: ChannelId, alias: String, params: ChannelParams, signal: Signal) -> Self {
        Self {
            id,
            alias,
            range: params.kind.range(),
            params,
            signal,
        }
    }

    pub(crate) fn trigger(signal: Signal) -> Self {
        Self::new(
            ChannelId::Trigger,
            identifiers::TRIGGER_ALIAS.to_string(),
            ChannelParams::trigger(),
            signal,
        )
    }

    /// Parsed identifier
    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Identifier string: `trigger`, `TTL{n}` or `DAC{n}`
    pub fn identifier(&self) -> String {
        self.id.to_string()
    }

    /// Human-readable label
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Parameters the signal is regenerated from
    pub fn params(&self) -> &ChannelParams {
        &self.params
    }

    /// Trigger occurrences between toggles
    pub fn period(&self) -> u32 {
        self.params.period
    }

    /// Whether sample 0 is high
    pub fn in_phase(&self) -> bool {
        self.params.in_phase
    }

    /// Whether this is a TTL record
    pub fn is_logical(&self) -> bool {
        self.params.is_logical()
    }

    /// Trigger interpretation mode
    pub fn mode(&self) -> TriggerMode {
        self.params.mode
    }

    /// Current bounds; never narrower than the configured range
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Sample count
    pub fn n_points(&self) -> usize {
        self.signal.len()
    }

    /// Physically scaled samples
    pub fn signal(&self) -> &[f64] {
        &self.signal
    }

    pub(crate) fn set_alias(&mut self, alias: String) {
        self.alias = alias;
    }

    /// Replace samples and parameters; the range resets to the new configured one
    pub(crate) fn replace(&mut self, params: ChannelParams, signal: Signal) {
        self.range = params.kind.range();
        self.params = params;
        self.signal = signal;
    }

    /// Swap in regenerated samples, keeping parameters and the current range
    pub(crate) fn set_signal(&mut self, signal: Signal) {
        self.signal = signal;
    }

    pub(crate) fn signal_mut(&mut self) -> &mut Signal {
        &mut self.signal
    }

    pub(crate) fn set_range(&mut self, range: [f64; 2]) {
        self.range = range;
    }
}
