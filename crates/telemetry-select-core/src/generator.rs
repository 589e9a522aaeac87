//! Synthetic telemetry generation.
//!
//! [`TelemetryGenerator`] draws every field of a [`TelemetryRecord`] from a
//! [`RandomSource`]. The default source is a seeded or OS-seeded
//! [`rand::rngs::StdRng`] wrapped in [`RngSource`]; tests can inject their
//! own source to get fully scripted records.
//!
//! Field ranges:
//!
//! | field | range |
//! |---|---|
//! | `avg_reading_time` | [`MIN_READING_MS`]..=[`MAX_READING_MS`] ms |
//! | `read_at` | now minus [`MIN_READING_MS`]..=[`MAX_READING_MS`] ms |
//! | `value` | `[0, 1)` |
//! | `is_calibration_data` | true with probability [`CALIBRATION_PROBABILITY`] |

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::{Result, SelectError};
use crate::record::TelemetryRecord;

/// Lower bound (inclusive) of generated reading times, in milliseconds.
pub const MIN_READING_MS: u64 = 42;
/// Upper bound (inclusive) of generated reading times, in milliseconds.
pub const MAX_READING_MS: u64 = 3600;
/// Probability that a generated record is flagged as calibration data.
pub const CALIBRATION_PROBABILITY: f64 = 0.4;

/// Words the two-part tags are built from.
pub const TAG_WORDS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

/// Randomness the generator consumes.
///
/// Implementations only need to be deterministic if the caller wants
/// reproducible datasets; the generator itself makes no assumption.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn int_inclusive(&mut self, low: u64, high: u64) -> u64;

    /// Uniform float in `[0, 1)`.
    fn unit_f64(&mut self) -> f64;

    /// `true` with the given probability (clamped to `[0, 1]`).
    fn chance(&mut self, probability: f64) -> bool;

    /// Fill `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.0.random_range(low..=high)
    }

    fn unit_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.0.random_bool(probability.clamp(0.0, 1.0))
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RngCore::fill_bytes(&mut self.0, dest);
    }
}

/// Produces datasets of synthetic [`TelemetryRecord`]s.
pub struct TelemetryGenerator<S = RngSource<StdRng>> {
    source: S,
}

impl TelemetryGenerator<RngSource<StdRng>> {
    /// Generator whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource(StdRng::seed_from_u64(seed)))
    }

    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(RngSource(StdRng::from_os_rng()))
    }
}

impl<S: RandomSource> TelemetryGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate exactly `quantity` records, timestamped relative to now.
    pub fn generate(&mut self, quantity: usize) -> Result<Vec<TelemetryRecord>> {
        self.generate_at(quantity, SystemTime::now())
    }

    /// Generate exactly `quantity` records with `read_at` relative to `now`.
    pub fn generate_at(
        &mut self,
        quantity: usize,
        now: SystemTime,
    ) -> Result<Vec<TelemetryRecord>> {
        if quantity == 0 {
            return Err(SelectError::invalid_argument(
                "quantity must be a positive number of records",
            ));
        }

        let records: Vec<TelemetryRecord> =
            (0..quantity).map(|_| self.next_record(now)).collect();
        debug!("generated dataset of {} telemetry records", records.len());
        Ok(records)
    }

    fn next_record(&mut self, now: SystemTime) -> TelemetryRecord {
        let mut id_bytes = [0u8; 16];
        self.source.fill_bytes(&mut id_bytes);
        let correlation_id = uuid::Builder::from_random_bytes(id_bytes).into_uuid();

        let tag = format!("{}_{}", self.tag_word(), self.tag_word());
        let avg_ms = self.source.int_inclusive(MIN_READING_MS, MAX_READING_MS);
        let age_ms = self.source.int_inclusive(MIN_READING_MS, MAX_READING_MS);
        let read_at = now
            .checked_sub(Duration::from_millis(age_ms))
            .filter(|t| *t >= UNIX_EPOCH)
            .unwrap_or(UNIX_EPOCH);
        let value = self.source.unit_f64();
        let is_calibration_data = self.source.chance(CALIBRATION_PROBABILITY);

        TelemetryRecord::new(
            correlation_id,
            tag,
            Duration::from_millis(avg_ms),
            read_at,
            value,
            is_calibration_data,
        )
    }

    fn tag_word(&mut self) -> &'static str {
        let idx = self.source.int_inclusive(0, TAG_WORDS.len() as u64 - 1) as usize;
        TAG_WORDS[idx]
    }
}

/// Generate `quantity` records with an OS-seeded generator.
pub fn generate(quantity: usize) -> Result<Vec<TelemetryRecord>> {
    TelemetryGenerator::from_os_rng().generate(quantity)
}
