// tests/program_integration.rs
//! Integration tests for program synthesis, editing and regeneration

use trigsync_core::{ChannelKind, ChannelParams, Program, SharedProgram, TriggerMode};

fn ttl(period: u32, in_phase: bool) -> ChannelParams {
    ChannelParams::logical(period, in_phase, TriggerMode::Change)
}

fn dac(period: u32, low: f64, high: f64) -> ChannelParams {
    ChannelParams::analog(period, true, low, high, TriggerMode::Change).expect("Valid range")
}

#[test]
fn test_three_cycle_trigger() {
    let program = Program::new(3).expect("Failed to create program");
    assert_eq!(program.trigger().signal(), &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    assert_eq!(program.trigger().identifier(), "trigger");
}

#[test]
fn test_ttl_period_one_follows_trigger() {
    let mut program = Program::new(3).expect("Failed to create program");
    program.add_channel("TTL1", "follow", ttl(1, true)).expect("Failed to add TTL1");

    assert_eq!(program.get("TTL1").unwrap().signal(), &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
}

#[test]
fn test_ttl_period_two_halves_frequency() {
    let mut program = Program::new(3).expect("Failed to create program");
    program.add_channel("TTL1", "half", ttl(2, true)).expect("Failed to add TTL1");

    assert_eq!(program.get("TTL1").unwrap().signal(), &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_dac_scaled_into_range() {
    let mut program = Program::new(3).expect("Failed to create program");
    program.add_channel("TTL1", "", ttl(2, true)).unwrap();
    program.add_channel("DAC1", "coil", dac(2, 0.0, 5.0)).expect("Failed to add DAC1");

    let record = program.get("DAC1").unwrap();
    assert_eq!(record.signal(), &[5.0, 5.0, 0.0, 0.0, 5.0, 5.0]);
    assert_eq!(record.range(), [0.0, 5.0]);
    assert!(!record.is_logical());
}

#[test]
fn test_resize_recomputes_channels_and_drops_edits() {
    let mut program = Program::new(3).expect("Failed to create program");
    program.add_channel("TTL1", "", ttl(2, true)).unwrap();
    program.add_channel("DAC1", "", dac(2, 0.0, 5.0)).unwrap();
    program.edit_point("TTL1", 0..6, 0.0).unwrap();
    program.edit_point("DAC1", 0..1, 8.0).unwrap();

    program.resize_trigger(5).expect("Failed to resize");

    assert_eq!(program.n_points(), 10);
    assert_eq!(
        program.trigger().signal(),
        &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]
    );
    assert_eq!(
        program.get("TTL1").unwrap().signal(),
        &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0]
    );
    assert_eq!(
        program.get("DAC1").unwrap().signal(),
        &[5.0, 5.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 5.0, 5.0]
    );
    assert_eq!(program.get("DAC1").unwrap().range(), [0.0, 8.0]);
}

#[test]
fn test_resize_keeps_widened_range() {
    let mut program = Program::new(3).unwrap();
    program.add_channel("DAC1", "", dac(1, 0.0, 5.0)).unwrap();
    program.edit_point("DAC1", 0..1, 9.0).unwrap();

    program.resize_trigger(3).expect("Failed to resize");

    let record = program.get("DAC1").unwrap();
    assert_eq!(record.range(), [0.0, 9.0]);
    assert_eq!(record.signal(), &[5.0, 0.0, 5.0, 0.0, 5.0, 0.0]);
}

#[test]
fn test_resize_twice_is_identical() {
    let mut program = Program::new(4).unwrap();
    program.add_channel("TTL1", "", ttl(3, false)).unwrap();
    program
        .add_channel(
            "DAC1",
            "",
            ChannelParams::analog(2, false, -10.0, 10.0, TriggerMode::FallingEdge).unwrap(),
        )
        .unwrap();

    program.resize_trigger(7).unwrap();
    let first = program.snapshot();
    program.edit_point("DAC1", 3..5, 0.5).unwrap();
    program.resize_trigger(7).unwrap();
    let second = program.snapshot();

    assert_eq!(first, second);
}

#[test]
fn test_shrinking_trigger() {
    let mut program = Program::new(5).unwrap();
    program.add_channel("TTL2", "", ttl(1, true)).unwrap();
    program.resize_trigger(1).unwrap();

    assert_eq!(program.get("TTL2").unwrap().signal(), &[1.0, 0.0]);
}

#[test]
fn test_all_records_share_length() {
    let mut program = Program::new(6).unwrap();
    for (i, mode) in TriggerMode::ALL.into_iter().enumerate() {
        let n = i as u32 + 1;
        program
            .add_channel(&format!("TTL{}", n), "", ChannelParams::logical(n, true, mode))
            .unwrap();
        program
            .add_channel(
                &format!("DAC{}", n),
                "",
                ChannelParams::analog(n, false, 0.0, f64::from(n), mode).unwrap(),
            )
            .unwrap();
    }

    let n_points = program.n_points();
    assert_eq!(program.channel_count(), 10);
    assert!(program.records().all(|r| r.n_points() == n_points));

    program.resize_trigger(2).unwrap();
    assert!(program.records().all(|r| r.n_points() == 4));
}

#[test]
fn test_front_end_workflow() {
    let shared = SharedProgram::new(Program::new(3).unwrap());

    let next = shared.read().next_identifier(&ChannelKind::Logical);
    shared
        .add_channel(&next.to_string(), "shutter", ttl(1, true))
        .expect("Failed to add generated identifier");
    shared.edit_point("TTL1", 2..4, 1.0).unwrap();

    let snapshot = shared.snapshot();
    assert_eq!(
        snapshot.record("TTL1").unwrap().signal,
        vec![1.0, 0.0, 1.0, 1.0, 1.0, 0.0]
    );

    shared.resize_trigger(3).unwrap();
    assert_eq!(
        shared.snapshot().record("TTL1").unwrap().signal,
        vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0]
    );
}
