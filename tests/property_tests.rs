// tests/property_tests.rs
//! Property tests for synthesis and program invariants

use proptest::prelude::*;
use trigsync_core::signal::{extract_events, generate_trigger, latch, run_count};
use trigsync_core::{ChannelParams, Program, TriggerMode};

fn trigger_mode() -> impl Strategy<Value = TriggerMode> {
    prop::sample::select(TriggerMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn trigger_alternates_high_low(cycles in 1u32..500) {
        let trigger = generate_trigger(cycles).unwrap();
        prop_assert_eq!(trigger.len(), 2 * cycles as usize);
        for (i, &sample) in trigger.iter().enumerate() {
            prop_assert_eq!(sample, if i % 2 == 0 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn change_with_unit_period_marks_every_transition(cycles in 1u32..200) {
        let trigger = generate_trigger(cycles).unwrap();
        let mask = extract_events(&trigger, 1, TriggerMode::Change).unwrap();
        prop_assert!(!mask.as_slice()[0]);
        prop_assert!(mask.as_slice()[1..].iter().all(|&event| event));
    }

    #[test]
    fn latch_runs_follow_event_count(
        cycles in 1u32..200,
        period in 1u32..10,
        in_phase: bool,
        mode in trigger_mode(),
    ) {
        let trigger = generate_trigger(cycles).unwrap();
        let mask = extract_events(&trigger, period, mode).unwrap();
        let binary = latch(&mask, in_phase);

        let events_after_start = mask.positions().filter(|&i| i > 0).count();
        prop_assert_eq!(binary.len(), trigger.len());
        prop_assert_eq!(binary[0], u8::from(in_phase));
        prop_assert_eq!(run_count(&binary), events_after_start + 1);
    }

    #[test]
    fn resize_discards_edits(
        cycles in 1u32..50,
        new_cycles in 1u32..50,
        period in 1u32..6,
        edit in 0usize..100,
        value in -50.0f64..50.0,
    ) {
        let mut program = Program::new(cycles).unwrap();
        program
            .add_channel("DAC1", "", ChannelParams::analog(period, true, 0.0, 5.0, TriggerMode::Change).unwrap())
            .unwrap();
        program.resize_trigger(new_cycles).unwrap();
        let clean = program.snapshot();

        let index = edit % program.n_points();
        program.edit_point("DAC1", index..index + 1, value).unwrap();
        let widened = program.get("DAC1").unwrap().range();
        program.resize_trigger(new_cycles).unwrap();

        let record = program.get("DAC1").unwrap();
        prop_assert_eq!(&record.signal().to_vec(), &clean.record("DAC1").unwrap().signal);
        prop_assert_eq!(record.range(), widened);
        prop_assert!(widened[0] <= 0.0 && widened[1] >= 5.0);
    }

    #[test]
    fn analog_range_only_widens(
        edits in prop::collection::vec((0usize..20, -100.0f64..100.0), 1..20),
    ) {
        let mut program = Program::new(10).unwrap();
        program
            .add_channel("DAC1", "", ChannelParams::analog(1, true, -1.0, 1.0, TriggerMode::Change).unwrap())
            .unwrap();

        let mut previous = program.get("DAC1").unwrap().range();
        for (index, value) in edits {
            program.edit_point("DAC1", index..index + 1, value).unwrap();
            let record = program.get("DAC1").unwrap();
            let [low, high] = record.range();

            prop_assert!(low <= previous[0] && high >= previous[1]);
            prop_assert!(record.signal().iter().all(|&s| s >= low && s <= high));
            previous = [low, high];
        }
    }
}
