//! # telemetry-select-core
//!
//! **Same answer, different cost.**
//!
//! `telemetry-select-core` answers two questions about a dataset of synthetic
//! telemetry readings several different ways and measures what each way costs:
//!
//! - which reading has the smallest average reading time (five variants, from
//!   a sort-based baseline to a deliberately quadratic one to hand-written
//!   single-pass loops)
//! - which reading is closest to the mean reading time (an aggregate-and-sort
//!   variant and a two-loop variant)
//!
//! ## Quick Start
//!
//! ```no_run
//! use telemetry_select_core::{Family, HarnessConfig, BenchmarkHarness, TelemetryGenerator, Variant};
//!
//! let mut generator = TelemetryGenerator::seeded(42);
//! let data = generator.generate(1000).unwrap();
//!
//! // Every variant of a family picks the same record.
//! let a = Variant::FastestBySort.select(&data).unwrap();
//! let b = Variant::FastestByIndexedScan.select(&data).unwrap();
//! assert_eq!(a.correlation_id(), b.correlation_id());
//!
//! // Rank the variants of one family.
//! let harness = BenchmarkHarness::new(HarnessConfig::default()).unwrap();
//! let report = harness.run_family(Family::Fastest, &mut generator).unwrap();
//! println!("fastest: {}", report.fastest().unwrap().name);
//! ```
//!
//! ## Architecture
//!
//! Generator → datasets (one per variant) → Harness → Variant → ranked report
//!
//! Records are immutable and variants only ever borrow them, so a dataset can
//! be measured any number of times without changing.

pub mod error;
pub mod generator;
pub mod harness;
pub mod ordering;
pub mod record;
pub mod select;

pub use error::{Result, SelectError};
pub use generator::{
    CALIBRATION_PROBABILITY, MAX_READING_MS, MIN_READING_MS, RandomSource, RngSource,
    TelemetryGenerator, generate,
};
pub use harness::alloc::{CountingAllocator, allocated_bytes};
pub use harness::{
    BenchCase, BenchmarkEntry, BenchmarkHarness, BenchmarkReport, DEFAULT_DATASET_SIZE,
    DatasetSource, HarnessConfig, TimingStats,
};
pub use ordering::{Direction, Listing, sort_by_avg_reading_time, sort_by_read_at};
pub use record::{TelemetryRecord, format_duration_ms, format_timestamp};
pub use select::{
    Family, Variant, closest_to_mean_by_scan, closest_to_mean_by_sort, fastest_by_indexed_scan,
    fastest_by_iter_scan, fastest_by_precomputed_min, fastest_by_recomputed_min, fastest_by_sort,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
