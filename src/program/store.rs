//! Signal program store
//! Location: src/program/store.rs
//!
//! A [`Program`] owns the trigger record and an ordered list of TTL/DAC
//! records. Every record's signal has the trigger's length. Mutations validate
//! all of their inputs before touching any record, so a returned error means
//! the program is unchanged.

use std::ops::Range;
use tracing::{debug, info, warn};

use crate::config::constants::channel::{LOGICAL_HIGH, LOGICAL_LOW};
use crate::config::ProgramConfig;
use crate::error::{ProgramError, ProgramResult};
use crate::signal::{generate_trigger, ChannelKind};
use crate::utils::bounds::check_sample_range;
use crate::utils::validation::{validate_analog_value, validate_cycles, validate_logical_value};

use super::identifier::ChannelId;
use super::record::{ChannelParams, SignalRecord};
use super::regenerate::{regenerate_all, regenerate_one};
use super::snapshot::{ProgramSnapshot, RecordSnapshot};

/// Trigger record plus its dependent channels
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    cycles: u32,
    trigger: SignalRecord,
    channels: Vec<SignalRecord>,
}

impl Program {
    /// Create a program holding only a trigger of `cycles` cycles
    pub fn new(cycles: u32) -> ProgramResult<Self> {
        let trigger = SignalRecord::trigger(generate_trigger(cycles)?);
        debug!(cycles, n_points = trigger.n_points(), "created program");

        Ok(Self {
            cycles,
            trigger,
            channels: Vec::new(),
        })
    }

    /// Build a program from its configuration
    pub fn from_config(config: &ProgramConfig) -> ProgramResult<Self> {
        config.build()
    }

    /// Trigger cycle count
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Sample count shared by every record
    pub fn n_points(&self) -> usize {
        self.trigger.n_points()
    }

    /// The trigger record
    pub fn trigger(&self) -> &SignalRecord {
        &self.trigger
    }

    /// TTL/DAC records in insertion order
    pub fn channels(&self) -> &[SignalRecord] {
        &self.channels
    }

    /// Trigger followed by every channel
    pub fn records(&self) -> impl Iterator<Item = &SignalRecord> {
        std::iter::once(&self.trigger).chain(self.channels.iter())
    }

    /// Number of TTL/DAC records, trigger excluded
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Whether a record with `identifier` exists
    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_ok()
    }

    /// Look up any record, trigger included
    pub fn get(&self, identifier: &str) -> ProgramResult<&SignalRecord> {
        match Self::resolve(identifier)? {
            ChannelId::Trigger => Ok(&self.trigger),
            id => self
                .position(id)
                .map(|index| &self.channels[index])
                .ok_or_else(|| ProgramError::NotFound(identifier.to_string())),
        }
    }

    /// First unused identifier of the given kind, one past the highest in use
    pub fn next_identifier(&self, kind: &ChannelKind) -> ChannelId {
        let logical = kind.is_logical();
        let highest = self
            .channels
            .iter()
            .filter_map(|record| match record.id() {
                ChannelId::Ttl(n) if logical => Some(n),
                ChannelId::Dac(n) if !logical => Some(n),
                _ => None,
            })
            .max();
        let next = highest.map_or(1, |n| n.saturating_add(1));

        if logical {
            ChannelId::Ttl(next)
        } else {
            ChannelId::Dac(next)
        }
    }

    /// Synthesize a channel against the current trigger and append it
    pub fn add_channel(
        &mut self,
        identifier: &str,
        alias: &str,
        params: ChannelParams,
    ) -> ProgramResult<ChannelId> {
        self.try_add_channel(identifier, alias, params)
            .inspect_err(|err| warn!(identifier, error = %err, "add_channel rejected"))
    }

    fn try_add_channel(
        &mut self,
        identifier: &str,
        alias: &str,
        params: ChannelParams,
    ) -> ProgramResult<ChannelId> {
        let id: ChannelId = identifier.parse()?;
        if id.is_trigger() || self.position(id).is_some() {
            return Err(ProgramError::DuplicateIdentifier(identifier.to_string()));
        }
        id.check_kind(&params.kind)?;

        let signal = params.synthesize(self.trigger.signal())?;
        self.channels
            .push(SignalRecord::new(id, alias.to_string(), params, signal));

        info!(
            identifier,
            alias,
            period = params.period,
            in_phase = params.in_phase,
            mode = %params.mode,
            "added channel"
        );
        Ok(id)
    }

    /// Remove a channel and hand back its record
    pub fn remove_channel(&mut self, identifier: &str) -> ProgramResult<SignalRecord> {
        let index = self
            .channel_index(identifier, "remove")
            .inspect_err(|err| warn!(identifier, error = %err, "remove_channel rejected"))?;

        let record = self.channels.remove(index);
        info!(identifier, remaining = self.channels.len(), "removed channel");
        Ok(record)
    }

    /// Overwrite `sample_range` of a channel with `value`.
    ///
    /// Logical channels accept only 0 or 1. Analog channels accept any finite
    /// value and widen their range to include it.
    pub fn edit_point(
        &mut self,
        identifier: &str,
        sample_range: Range<usize>,
        value: f64,
    ) -> ProgramResult<()> {
        self.try_edit_point(identifier, sample_range, value)
            .inspect_err(|err| warn!(identifier, value, error = %err, "edit_point rejected"))
    }

    fn try_edit_point(
        &mut self,
        identifier: &str,
        sample_range: Range<usize>,
        value: f64,
    ) -> ProgramResult<()> {
        let index = self.channel_index(identifier, "edit")?;
        let n_points = self.n_points();

        check_sample_range(&sample_range, n_points)
            .map_err(|_| ProgramError::out_of_range(identifier, &sample_range, n_points))?;

        let record = &mut self.channels[index];
        let stored = if record.is_logical() {
            validate_logical_value(identifier, value)?;
            // -0.0 compares equal to 0.0
            if value == LOGICAL_LOW { LOGICAL_LOW } else { LOGICAL_HIGH }
        } else {
            validate_analog_value(identifier, value)?;
            let [low, high] = record.range();
            record.set_range([low.min(value), high.max(value)]);
            value
        };

        record.signal_mut()[sample_range.clone()].fill(stored);
        debug!(
            identifier,
            start = sample_range.start,
            end = sample_range.end,
            value,
            "edited samples"
        );
        Ok(())
    }

    /// Regenerate the trigger to `new_cycles` and every channel to match.
    ///
    /// Channels are rebuilt from their stored parameters and point edits are
    /// discarded. An analog range keeps any widening from earlier edits; it
    /// never shrinks. Calling this twice with the same value yields identical
    /// signals.
    pub fn resize_trigger(&mut self, new_cycles: u32) -> ProgramResult<()> {
        self.try_resize_trigger(new_cycles)
            .inspect_err(|err| warn!(new_cycles, error = %err, "resize_trigger rejected"))
    }

    fn try_resize_trigger(&mut self, new_cycles: u32) -> ProgramResult<()> {
        validate_cycles(new_cycles)?;
        let trigger_signal = generate_trigger(new_cycles)?;

        regenerate_all(&trigger_signal, &mut self.channels)?;

        let old_cycles = self.cycles;
        self.trigger.set_signal(trigger_signal);
        self.cycles = new_cycles;

        info!(
            old_cycles,
            new_cycles,
            n_points = self.n_points(),
            channels = self.channels.len(),
            "resized trigger"
        );
        Ok(())
    }

    /// Relabel any record, trigger included
    pub fn set_alias(&mut self, identifier: &str, alias: &str) -> ProgramResult<()> {
        let record = match Self::resolve(identifier)? {
            ChannelId::Trigger => &mut self.trigger,
            id => {
                let index = self
                    .position(id)
                    .ok_or_else(|| ProgramError::NotFound(identifier.to_string()))?;
                &mut self.channels[index]
            }
        };
        record.set_alias(alias.to_string());
        debug!(identifier, alias, "renamed record");
        Ok(())
    }

    /// Replace a channel's generation parameters and resynthesize it
    pub fn reconfigure_channel(&mut self, identifier: &str, params: ChannelParams) -> ProgramResult<()> {
        self.try_reconfigure_channel(identifier, params)
            .inspect_err(|err| warn!(identifier, error = %err, "reconfigure_channel rejected"))
    }

    fn try_reconfigure_channel(&mut self, identifier: &str, params: ChannelParams) -> ProgramResult<()> {
        let index = self.channel_index(identifier, "reconfigure")?;
        let record = &mut self.channels[index];
        record.id().check_kind(&params.kind)?;

        let signal = params.synthesize(self.trigger.signal())?;
        record.replace(params, signal);

        info!(
            identifier,
            period = params.period,
            in_phase = params.in_phase,
            mode = %params.mode,
            "reconfigured channel"
        );
        Ok(())
    }

    /// Resynthesize one channel from its stored parameters, dropping its edits
    pub fn reset_channel(&mut self, identifier: &str) -> ProgramResult<()> {
        let index = self.channel_index(identifier, "reset")?;
        regenerate_one(self.trigger.signal(), &mut self.channels[index])?;
        debug!(identifier, "reset channel");
        Ok(())
    }

    /// Plain-data copy of the whole program
    pub fn snapshot(&self) -> ProgramSnapshot {
        ProgramSnapshot {
            cycles: self.cycles,
            n_points: self.n_points(),
            records: self.records().map(RecordSnapshot::from).collect(),
        }
    }

    fn resolve(identifier: &str) -> ProgramResult<ChannelId> {
        identifier
            .parse()
            .map_err(|_| ProgramError::NotFound(identifier.to_string()))
    }

    fn position(&self, id: ChannelId) -> Option<usize> {
        self.channels.iter().position(|record| record.id() == id)
    }

    /// Index of a non-trigger record; the trigger is protected from `operation`
    fn channel_index(&self, identifier: &str, operation: &'static str) -> ProgramResult<usize> {
        match Self::resolve(identifier)? {
            ChannelId::Trigger => Err(ProgramError::ProtectedRecord {
                identifier: identifier.to_string(),
                operation,
            }),
            id => self
                .position(id)
                .ok_or_else(|| ProgramError::NotFound(identifier.to_string())),
        }
    }
}
