//! Toggle flip-flop over an event mask
//! Location: src/signal/latch.rs

use super::events::EventMask;

/// Binary output of the toggle latch, one 0/1 value per sample
pub type BinarySignal = Vec<u8>;

/// Run the toggle latch: start at `in_phase`, invert on every event, hold otherwise.
///
/// An event at sample 0 is ignored; the starting level is always `in_phase`.
pub fn latch(events: &EventMask, in_phase: bool) -> BinarySignal {
    let mut state = in_phase;

    events
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &toggle)| {
            if i > 0 && toggle {
                state = !state;
            }
            u8::from(state)
        })
        .collect()
}

/// Number of constant-value runs in a binary signal
pub fn run_count(binary: &[u8]) -> usize {
    if binary.is_empty() {
        return 0;
    }
    1 + binary.windows(2).filter(|w| w[0] != w[1]).count()
}
