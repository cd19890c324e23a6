//! Re-synthesis of dependent channels after the trigger changes
//! Location: src/program/regenerate.rs

use crate::error::ProgramResult;
use crate::signal::Signal;

use super::record::SignalRecord;

/// Recompute every channel against `trigger` from its stored parameters.
///
/// Point edits are dropped; a range already widened by them is kept.
/// Nothing is written until all channels have synthesized, so a failure
/// leaves `channels` exactly as it was.
pub(crate) fn regenerate_all(trigger: &[f64], channels: &mut [SignalRecord]) -> ProgramResult<()> {
    let fresh = channels
        .iter()
        .map(|record| record.params().synthesize(trigger))
        .collect::<ProgramResult<Vec<Signal>>>()?;

    for (record, signal) in channels.iter_mut().zip(fresh) {
        record.set_signal(signal);
    }
    Ok(())
}

/// Recompute a single channel, discarding its point edits
pub(crate) fn regenerate_one(trigger: &[f64], record: &mut SignalRecord) -> ProgramResult<()> {
    let signal = record.params().synthesize(trigger)?;
    record.set_signal(signal);
    Ok(())
}
