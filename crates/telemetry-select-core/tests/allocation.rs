//! Memory column of the harness with the counting allocator installed.
//!
//! Other tests in this binary allocate concurrently, so only lower bounds
//! are asserted.

use telemetry_select_core::{
    BenchCase, BenchmarkHarness, CountingAllocator, HarnessConfig, TelemetryGenerator, Variant,
    allocated_bytes,
};

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator;

const SIZE: usize = 1_000;

fn harness() -> BenchmarkHarness {
    BenchmarkHarness::new(HarnessConfig {
        dataset_size: SIZE,
        warmup_iterations: 1,
        iterations: 10,
        include_control: true,
    })
    .unwrap()
}

#[test]
fn counter_moves_when_installed() {
    let before = allocated_bytes().unwrap();
    let buf: Vec<u64> = std::hint::black_box(Vec::with_capacity(4_096));
    let after = allocated_bytes().unwrap();
    assert!(after - before >= 4_096 * 8);
    drop(std::hint::black_box(buf));
}

#[test]
fn sort_variant_reports_its_copy() {
    let mut generator = TelemetryGenerator::seeded(1);
    let data = generator.generate(SIZE).unwrap();
    let cases = vec![BenchCase::pregenerated(Variant::FastestBySort, data)];
    let report = harness().run("sort", &cases, &mut generator).unwrap();

    let per_op = report.entries[0].allocated_bytes_per_op.unwrap();
    let pointer = std::mem::size_of::<usize>() as u64;
    assert!(per_op >= SIZE as u64 * pointer, "{per_op} bytes/op");
}

#[test]
fn control_case_reports_generation() {
    let mut generator = TelemetryGenerator::seeded(2);
    let cases = vec![BenchCase::control(Variant::FastestByIndexedScan)];
    let report = harness().run("control", &cases, &mut generator).unwrap();

    let per_op = report.entries[0].allocated_bytes_per_op.unwrap();
    let record = std::mem::size_of::<telemetry_select_core::TelemetryRecord>() as u64;
    assert!(per_op >= SIZE as u64 * record, "{per_op} bytes/op");
}
