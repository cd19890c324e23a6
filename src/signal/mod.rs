//! Trigger-synchronized waveform synthesis
//! Location: src/signal/mod.rs
//!
//! The chain runs leaf to root: [`trigger::generate_trigger`] produces the
//! master waveform, [`events::extract_events`] picks the samples at which a
//! channel toggles, [`latch::latch`] turns those events into a held 0/1 level
//! and [`ChannelKind::map`] scales it into the channel's physical range.

pub mod events;
pub mod latch;
pub mod range;
pub mod trigger;

pub use events::{extract_events, EventMask};
pub use latch::{latch, run_count, BinarySignal};
pub use range::{map_range, ChannelKind, VoltageRange};
pub use trigger::{generate_trigger, trigger_len, TriggerMode};

use crate::error::ProgramResult;

/// Physically scaled sample sequence
pub type Signal = Vec<f64>;

/// Run extractor, latch and mapper for one channel against `trigger`
pub fn synthesize(
    trigger: &[f64],
    period: u32,
    in_phase: bool,
    kind: &ChannelKind,
    mode: TriggerMode,
) -> ProgramResult<Signal> {
    let events = extract_events(trigger, period, mode)?;
    let binary = latch(&events, in_phase);
    Ok(kind.map(&binary))
}
