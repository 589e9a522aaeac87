//! Benchmark harness for the selection variants.
//!
//! Architecture:
//! 1. Generate one independent dataset per variant, outside any timed region
//! 2. Add a control case per family that generates its dataset inside the
//!    timed region, to expose generation cost as a baseline offset
//! 3. Warm up, then time each call individually
//! 4. Sample the allocation counter around the measured batch
//! 5. Rank cases by mean elapsed time, fastest first
//!
//! Everything runs on the calling thread, one case after another.

pub mod alloc;
pub mod report;

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::error::{Result, SelectError};
use crate::generator::{RandomSource, TelemetryGenerator};
use crate::record::TelemetryRecord;
use crate::select::{Family, Variant};

use self::alloc::AllocSnapshot;
use self::report::CaseMeasurement;
pub use self::report::{BenchmarkEntry, BenchmarkReport, TimingStats};

/// Default number of records per benchmark dataset.
pub const DEFAULT_DATASET_SIZE: usize = 1000;

/// Harness parameters.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Records per dataset.
    pub dataset_size: usize,
    /// Calls per case before measuring (results discarded).
    pub warmup_iterations: usize,
    /// Measured calls per case.
    pub iterations: usize,
    /// Add the generation-inside-the-timer control case to each family.
    pub include_control: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            dataset_size: DEFAULT_DATASET_SIZE,
            warmup_iterations: 3,
            iterations: 100,
            include_control: true,
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.dataset_size == 0 {
            return Err(SelectError::invalid_argument("dataset_size must be > 0"));
        }
        if self.iterations == 0 {
            return Err(SelectError::invalid_argument("iterations must be > 0"));
        }
        Ok(())
    }
}

/// Where a case gets its dataset from.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Built before measuring; only the selection is timed.
    Pregenerated(Vec<TelemetryRecord>),
    /// Generated inside every timed call (control group).
    GeneratedPerCall,
}

/// A variant paired with the dataset it will be measured on.
#[derive(Debug, Clone)]
pub struct BenchCase {
    pub name: String,
    pub variant: Variant,
    pub dataset: DatasetSource,
}

impl BenchCase {
    pub fn pregenerated(variant: Variant, dataset: Vec<TelemetryRecord>) -> Self {
        Self {
            name: variant.name().to_string(),
            variant,
            dataset: DatasetSource::Pregenerated(dataset),
        }
    }

    pub fn control(variant: Variant) -> Self {
        Self {
            name: format!("{}-control", variant.name()),
            variant,
            dataset: DatasetSource::GeneratedPerCall,
        }
    }

    pub fn is_control(&self) -> bool {
        matches!(self.dataset, DatasetSource::GeneratedPerCall)
    }
}

/// Runs benchmark cases and ranks them.
pub struct BenchmarkHarness {
    config: HarnessConfig,
}

impl BenchmarkHarness {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// One case per variant of `family`, each with its own freshly generated
    /// dataset, plus the control case when enabled.
    pub fn prepare<S: RandomSource>(
        &self,
        family: Family,
        generator: &mut TelemetryGenerator<S>,
    ) -> Result<Vec<BenchCase>> {
        let mut cases = Vec::new();
        for variant in family.variants() {
            let dataset = generator.generate(self.config.dataset_size)?;
            cases.push(BenchCase::pregenerated(variant, dataset));
        }
        if self.config.include_control {
            cases.push(BenchCase::control(family.control_variant()));
        }
        Ok(cases)
    }

    /// Measure every case and return them ranked fastest to slowest.
    ///
    /// `generator` is only used by control cases.
    pub fn run<S: RandomSource>(
        &self,
        title: &str,
        cases: &[BenchCase],
        generator: &mut TelemetryGenerator<S>,
    ) -> Result<BenchmarkReport> {
        if cases.is_empty() {
            return Err(SelectError::invalid_argument("no benchmark cases to run"));
        }
        info!(
            "benchmark '{}': {} cases, {} records, {} warmup + {} measured calls",
            title,
            cases.len(),
            self.config.dataset_size,
            self.config.warmup_iterations,
            self.config.iterations
        );
        if alloc::allocated_bytes().is_none() {
            warn!("allocation tracking not installed; memory column will be empty");
        }

        let mut measurements = Vec::with_capacity(cases.len());
        for case in cases {
            measurements.push(self.measure(case, generator)?);
        }

        let report = BenchmarkReport::ranked(
            title,
            self.config.dataset_size,
            self.config.warmup_iterations,
            self.config.iterations,
            measurements,
        );
        if let Some(fastest) = report.fastest() {
            info!(
                "benchmark '{}' done, fastest: {} ({:?} mean)",
                title,
                fastest.name,
                fastest.timing.mean()
            );
        }
        Ok(report)
    }

    /// [`Self::prepare`] then [`Self::run`] for one family.
    pub fn run_family<S: RandomSource>(
        &self,
        family: Family,
        generator: &mut TelemetryGenerator<S>,
    ) -> Result<BenchmarkReport> {
        let cases = self.prepare(family, generator)?;
        self.run(family.name(), &cases, generator)
    }

    fn measure<S: RandomSource>(
        &self,
        case: &BenchCase,
        generator: &mut TelemetryGenerator<S>,
    ) -> Result<CaseMeasurement> {
        for _ in 0..self.config.warmup_iterations {
            self.timed_call(case, generator)?;
        }

        let mut samples = Vec::with_capacity(self.config.iterations);
        let before = AllocSnapshot::take();
        for _ in 0..self.config.iterations {
            samples.push(self.timed_call(case, generator)?);
        }
        let allocated_bytes_per_op = before.per_op_since(self.config.iterations);

        let timing = TimingStats::from_samples(&samples)
            .ok_or_else(|| SelectError::invalid_argument("iterations must be > 0"))?;
        debug!(
            "measured {}: mean {:.0}ns, median {:.0}ns, alloc/op {:?}",
            case.name, timing.mean_ns, timing.median_ns, allocated_bytes_per_op
        );

        Ok(CaseMeasurement {
            name: case.name.clone(),
            variant: case.variant,
            control: case.is_control(),
            timing,
            allocated_bytes_per_op,
        })
    }

    fn timed_call<S: RandomSource>(
        &self,
        case: &BenchCase,
        generator: &mut TelemetryGenerator<S>,
    ) -> Result<Duration> {
        match &case.dataset {
            DatasetSource::Pregenerated(data) => {
                let start = Instant::now();
                let found = case.variant.select(black_box(data.as_slice()))?;
                black_box(found);
                Ok(start.elapsed())
            }
            DatasetSource::GeneratedPerCall => {
                let start = Instant::now();
                let data = generator.generate(self.config.dataset_size)?;
                let found = case.variant.select(black_box(data.as_slice()))?;
                black_box(found);
                Ok(start.elapsed())
            }
        }
    }
}
