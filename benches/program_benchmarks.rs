use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trigsync_core::signal::{extract_events, generate_trigger, latch};
use trigsync_core::{ChannelParams, Program, TriggerMode};

const CYCLE_COUNTS: &[u32] = &[100, 1_000, 10_000, 100_000];
const CHANNEL_COUNTS: &[u32] = &[1, 8, 32];

fn populated_program(cycles: u32, channels: u32) -> Program {
    let mut program = Program::new(cycles).expect("valid cycle count");
    for n in 1..=channels {
        let ttl = ChannelParams::logical(n, n % 2 == 0, TriggerMode::Change);
        program.add_channel(&format!("TTL{}", n), "", ttl).expect("valid TTL");

        let dac = ChannelParams::analog(n, true, -5.0, 5.0, TriggerMode::RisingEdge).expect("valid range");
        program.add_channel(&format!("DAC{}", n), "", dac).expect("valid DAC");
    }
    program
}

fn benchmark_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis");

    for &cycles in CYCLE_COUNTS {
        group.throughput(Throughput::Elements(2 * u64::from(cycles)));

        group.bench_with_input(BenchmarkId::new("generate_trigger", cycles), &cycles, |b, &cycles| {
            b.iter(|| generate_trigger(black_box(cycles)))
        });

        let trigger = generate_trigger(cycles).expect("valid cycle count");
        for mode in [TriggerMode::Change, TriggerMode::RisingEdge, TriggerMode::LevelHigh] {
            group.bench_with_input(
                BenchmarkId::new(format!("events_and_latch_{}", mode), cycles),
                &trigger,
                |b, trigger| {
                    b.iter(|| {
                        let mask = extract_events(black_box(trigger), 3, mode).expect("valid period");
                        latch(&mask, true)
                    })
                },
            );
        }
    }

    group.finish();
}

fn benchmark_add_channel(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_channel");

    for &cycles in CYCLE_COUNTS {
        let program = Program::new(cycles).expect("valid cycle count");
        group.throughput(Throughput::Elements(2 * u64::from(cycles)));

        group.bench_with_input(BenchmarkId::new("dac", cycles), &program, |b, program| {
            let params = ChannelParams::analog(2, true, 0.0, 5.0, TriggerMode::Change).expect("valid range");
            b.iter_batched(
                || program.clone(),
                |mut program| program.add_channel("DAC1", "", black_box(params)),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn benchmark_resize_trigger(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_trigger");
    group.sample_size(20);

    for &channels in CHANNEL_COUNTS {
        for &cycles in &CYCLE_COUNTS[..3] {
            let label = format!("{}ch_{}cycles", 2 * channels, cycles);
            group.bench_function(BenchmarkId::new("regenerate", label), |b| {
                let mut program = populated_program(cycles / 2, channels);
                b.iter(|| program.resize_trigger(black_box(cycles)))
            });
        }
    }

    group.finish();
}

fn benchmark_edit_point(c: &mut Criterion) {
    let mut program = populated_program(10_000, 4);
    let n_points = program.n_points();

    c.bench_function("edit_point_dac_block", |b| {
        let mut value = 0.0;
        b.iter(|| {
            value += 0.25;
            program.edit_point("DAC2", black_box(100..n_points - 100), value)
        })
    });
}

criterion_group!(
    benches,
    benchmark_synthesis,
    benchmark_add_channel,
    benchmark_resize_trigger,
    benchmark_edit_point
);
criterion_main!(benches);
