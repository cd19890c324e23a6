//! Toggle-event extraction from a trigger waveform
//! Location: src/signal/events.rs

use crate::error::ProgramResult;
use crate::utils::validation::validate_period;

use super::trigger::{is_high, TriggerMode};

/// Per-sample "toggle now" flags, same length as the trigger it was extracted from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventMask {
    events: Vec<bool>,
}

impl EventMask {
    /// Mask with no events
    pub fn empty(len: usize) -> Self {
        Self { events: vec![false; len] }
    }

    /// Sample count
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the mask covers no samples
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of toggle events
    pub fn count(&self) -> usize {
        self.events.iter().filter(|&&e| e).count()
    }

    /// Sample indices carrying a toggle event
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.events
            .iter()
            .enumerate()
            .filter_map(|(i, &e)| e.then_some(i))
    }

    /// One flag per sample
    pub fn as_slice(&self) -> &[bool] {
        &self.events
    }
}

impl From<Vec<bool>> for EventMask {
    fn from(events: Vec<bool>) -> Self {
        Self { events }
    }
}

/// Mark every `period`-th trigger occurrence under `mode` as a toggle event.
///
/// Occurrences are counted from sample 1 onwards; sample 0 never carries an
/// event because it has no predecessor to compare against.
pub fn extract_events(trigger: &[f64], period: u32, mode: TriggerMode) -> ProgramResult<EventMask> {
    validate_period(period)?;

    let mut events = vec![false; trigger.len()];
    let mut event_number: u64 = 0;

    for i in 1..trigger.len() {
        let previous = is_high(trigger[i - 1]);
        let current = is_high(trigger[i]);

        if mode.is_occurrence(previous, current) {
            event_number += 1;
            events[i] = event_number % u64::from(period) == 0;
        }
    }

    tracing::trace!(
        n_points = trigger.len(),
        period,
        %mode,
        occurrences = event_number,
        "extracted toggle events"
    );

    Ok(EventMask { events })
}
