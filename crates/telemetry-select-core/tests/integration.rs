//! Integration tests for telemetry-select-core.
//!
//! These exercise the public API end to end:
//! generation → selection variants → harness ranking.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use telemetry_select_core::{
    BenchmarkHarness, Family, HarnessConfig, MAX_READING_MS, MIN_READING_MS, RandomSource,
    SelectError, TelemetryGenerator, TelemetryRecord, Variant,
};
use uuid::Uuid;

fn dataset_ms(millis: &[u64]) -> Vec<TelemetryRecord> {
    millis
        .iter()
        .enumerate()
        .map(|(i, &ms)| {
            TelemetryRecord::new(
                Uuid::from_u128(i as u128 + 1),
                format!("circuit_{i}"),
                Duration::from_millis(ms),
                UNIX_EPOCH + Duration::from_secs(i as u64),
                0.5,
                i % 2 == 0,
            )
        })
        .collect()
}

fn index_of(data: &[TelemetryRecord], found: &TelemetryRecord) -> usize {
    data.iter()
        .position(|r| std::ptr::eq(r, found))
        .expect("variant must return a record from its input")
}

/// Replays a fixed list of reading times; everything else is constant.
struct ScriptedSource {
    reading_ms: Vec<u64>,
    next: usize,
    calls: usize,
}

impl ScriptedSource {
    fn new(reading_ms: &[u64]) -> Self {
        Self {
            reading_ms: reading_ms.to_vec(),
            next: 0,
            calls: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn int_inclusive(&mut self, low: u64, high: u64) -> u64 {
        // Per record: two tag words, the reading time, then the read_at age.
        self.calls += 1;
        match self.calls % 4 {
            3 => {
                let ms = self.reading_ms[self.next % self.reading_ms.len()];
                self.next += 1;
                ms.clamp(low, high)
            }
            _ => low,
        }
    }
    fn unit_f64(&mut self) -> f64 {
        0.0
    }
    fn chance(&mut self, _probability: f64) -> bool {
        false
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for (i, b) in dest.iter_mut().enumerate() {
            *b = (self.next as u8).wrapping_add(i as u8);
        }
    }
}

// ---------------------------------------------------------------------------
// Cross-variant agreement
// ---------------------------------------------------------------------------

#[test]
fn minimum_variants_agree_on_generated_datasets() {
    for seed in 0..25 {
        let data = TelemetryGenerator::seeded(seed).generate(500).unwrap();
        let expected = Variant::FastestBySort.select(&data).unwrap();
        for v in Family::Fastest.variants() {
            let found = v.select(&data).unwrap();
            assert_eq!(found.avg_reading_time(), expected.avg_reading_time(), "{v}");
            assert_eq!(found.correlation_id(), expected.correlation_id(), "{v}");
        }
    }
}

#[test]
fn closest_variants_agree_on_generated_datasets() {
    for seed in 0..25 {
        let data = TelemetryGenerator::seeded(seed).generate(500).unwrap();
        let by_sort = Variant::ClosestToMeanBySort.select(&data).unwrap();
        let by_scan = Variant::ClosestToMeanByScan.select(&data).unwrap();
        assert!(std::ptr::eq(by_sort, by_scan), "seed {seed}");
    }
}

#[test]
fn variants_agree_on_heavily_tied_data() {
    // Readings drawn from a tiny range force many ties.
    let millis: Vec<u64> = (0..300).map(|i| 42 + (i * 7919 % 5)).collect();
    let data = dataset_ms(&millis);
    let fastest: Vec<usize> = Family::Fastest
        .variants()
        .map(|v| index_of(&data, v.select(&data).unwrap()))
        .collect();
    assert!(fastest.iter().all(|&i| i == fastest[0]));
    assert_eq!(
        fastest[0],
        millis.iter().position(|&m| m == 42).unwrap()
    );

    let closest: Vec<usize> = Family::ClosestToMean
        .variants()
        .map(|v| index_of(&data, v.select(&data).unwrap()))
        .collect();
    assert_eq!(closest[0], closest[1]);
}

// ---------------------------------------------------------------------------
// Tie-break, single element, idempotence
// ---------------------------------------------------------------------------

#[test]
fn ties_at_two_and_five_pick_index_two() {
    let data = dataset_ms(&[900, 800, 55, 700, 600, 55, 500]);
    for v in Family::Fastest.variants() {
        assert_eq!(index_of(&data, v.select(&data).unwrap()), 2, "{v}");
    }
}

#[test]
fn single_element_dataset_returns_it_for_every_variant() {
    let data = dataset_ms(&[1_234]);
    for v in Variant::ALL {
        assert_eq!(index_of(&data, v.select(&data).unwrap()), 0, "{v}");
    }
}

#[test]
fn repeated_runs_return_same_record() {
    let data = TelemetryGenerator::seeded(11).generate(200).unwrap();
    let snapshot = data.clone();
    for v in Variant::ALL {
        let first = v.select(&data).unwrap();
        for _ in 0..5 {
            assert!(std::ptr::eq(v.select(&data).unwrap(), first), "{v}");
        }
    }
    assert_eq!(data, snapshot);
}

#[test]
fn empty_dataset_fails_for_every_variant() {
    for v in Variant::ALL {
        assert!(
            matches!(v.select(&[]), Err(SelectError::NoElements)),
            "{v} accepted an empty dataset"
        );
    }
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn four_reading_scenario() {
    let data = dataset_ms(&[100, 50, 50, 200]);
    for v in Family::Fastest.variants() {
        assert_eq!(index_of(&data, v.select(&data).unwrap()), 1, "{v}");
    }
    for v in Family::ClosestToMean.variants() {
        assert_eq!(index_of(&data, v.select(&data).unwrap()), 0, "{v}");
    }
}

#[test]
fn scripted_generator_feeds_variants() {
    let now = UNIX_EPOCH + Duration::from_secs(10_000);
    let mut generator = TelemetryGenerator::new(ScriptedSource::new(&[100, 50, 50, 200]));
    let data = generator.generate_at(4, now).unwrap();

    let millis: Vec<u128> = data.iter().map(|r| r.avg_reading_time().as_millis()).collect();
    assert_eq!(millis, vec![100, 50, 50, 200]);

    assert_eq!(index_of(&data, Variant::FastestByIterScan.select(&data).unwrap()), 1);
    assert_eq!(index_of(&data, Variant::ClosestToMeanByScan.select(&data).unwrap()), 0);
}

// ---------------------------------------------------------------------------
// Generator range invariants
// ---------------------------------------------------------------------------

#[test]
fn generated_records_respect_ranges() {
    let now = SystemTime::now();
    let data = TelemetryGenerator::from_os_rng().generate_at(5_000, now).unwrap();
    for r in &data {
        let ms = r.avg_reading_time().as_millis() as u64;
        assert!((MIN_READING_MS..=MAX_READING_MS).contains(&ms));
        assert!(r.value() >= 0.0 && r.value() < 1.0);
        assert!(!r.tag().is_empty());
        assert!(r.read_at() < now);
    }
}

#[test]
fn zero_quantity_is_rejected() {
    assert!(matches!(
        telemetry_select_core::generate(0),
        Err(SelectError::InvalidArgument(_))
    ));
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

#[test]
fn harness_ranks_both_families() {
    let harness = BenchmarkHarness::new(HarnessConfig {
        dataset_size: 100,
        warmup_iterations: 1,
        iterations: 10,
        include_control: true,
    })
    .unwrap();
    let mut generator = TelemetryGenerator::seeded(5);

    for family in Family::ALL {
        let report = harness.run_family(family, &mut generator).unwrap();
        assert_eq!(report.entries.len(), family.variants().count() + 1);
        let ranks: Vec<usize> = report.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=report.entries.len()).collect::<Vec<_>>());
        assert!(report.entries.iter().all(|e| e.family == family));
        assert!(report.to_json().unwrap().contains(family.name()));
    }
}

#[test]
#[ignore] // Timing-sensitive. Run with: cargo test -- --ignored
fn quadratic_baseline_is_slowest_at_default_size() {
    let harness = BenchmarkHarness::new(HarnessConfig {
        include_control: false,
        iterations: 20,
        ..HarnessConfig::default()
    })
    .unwrap();
    let mut generator = TelemetryGenerator::seeded(8);
    let report = harness.run_family(Family::Fastest, &mut generator).unwrap();
    let last = report.entries.last().unwrap();
    assert_eq!(last.variant, Variant::FastestByRecomputedMin);
}
