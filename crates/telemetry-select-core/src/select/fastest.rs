//! Five ways to find the record with the smallest `avg_reading_time`.
//!
//! Every function returns the same record for the same input: the minimum,
//! with ties going to the lowest index. They differ only in how much work and
//! memory they spend getting there.

use std::time::Duration;

use crate::error::{Result, SelectError};
use crate::record::TelemetryRecord;

/// Stable-sort a copy of the dataset ascending and take the head.
///
/// O(n log n) time, O(n) extra space for the sorted references.
pub fn fastest_by_sort(data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
    let mut sorted: Vec<&TelemetryRecord> = data.iter().collect();
    // sort_by_key is stable, equal keys keep input order.
    sorted.sort_by_key(|r| r.avg_reading_time());
    sorted.first().copied().ok_or(SelectError::NoElements)
}

/// First record equal to the minimum, recomputing the minimum inside the
/// predicate for every record scanned.
///
/// O(n²). This is the slow baseline the benchmark contrasts against.
pub fn fastest_by_recomputed_min(data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
    data.iter()
        .find(|r| Some(r.avg_reading_time()) == data.iter().map(|d| d.avg_reading_time()).min())
        .ok_or(SelectError::NoElements)
}

/// Compute the minimum once, then return the first record that has it.
///
/// O(n), two passes.
pub fn fastest_by_precomputed_min(data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
    let min = data
        .iter()
        .map(TelemetryRecord::avg_reading_time)
        .min()
        .ok_or(SelectError::NoElements)?;
    data.iter()
        .find(|r| r.avg_reading_time() == min)
        .ok_or(SelectError::NoElements)
}

/// Single iterator pass keeping the running minimum and its owner.
///
/// O(n), O(1). Only a strictly smaller value replaces the current best.
pub fn fastest_by_iter_scan(data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
    let mut min = Duration::MAX;
    let mut best = None;
    for record in data {
        if record.avg_reading_time() >= min {
            continue;
        }
        min = record.avg_reading_time();
        best = Some(record);
    }
    best.ok_or(SelectError::NoElements)
}

/// Same as [`fastest_by_iter_scan`] with indexed access.
#[allow(clippy::needless_range_loop)]
pub fn fastest_by_indexed_scan(data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
    let mut min = Duration::MAX;
    let mut best = None;
    for i in 0..data.len() {
        if data[i].avg_reading_time() >= min {
            continue;
        }
        min = data[i].avg_reading_time();
        best = Some(&data[i]);
    }
    best.ok_or(SelectError::NoElements)
}
