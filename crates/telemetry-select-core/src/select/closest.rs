//! Two ways to find the record closest to the mean reading time.
//!
//! Both compute the mean as a sum in index order divided by the count, over
//! [`TelemetryRecord::avg_reading_time_ms`]. Keeping the arithmetic identical
//! is what makes the two results bit-for-bit comparable.

use crate::error::{Result, SelectError};
use crate::record::TelemetryRecord;

/// Mean via an iterator aggregate, then stable sort by distance to it.
///
/// O(n log n).
pub fn closest_to_mean_by_sort(data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
    if data.is_empty() {
        return Err(SelectError::NoElements);
    }
    let mean = data
        .iter()
        .map(TelemetryRecord::avg_reading_time_ms)
        .sum::<f64>()
        / data.len() as f64;

    let mut by_distance: Vec<(&TelemetryRecord, f64)> = data
        .iter()
        .map(|r| (r, (r.avg_reading_time_ms() - mean).abs()))
        .collect();
    by_distance.sort_by(|a, b| a.1.total_cmp(&b.1));
    by_distance
        .first()
        .map(|(r, _)| *r)
        .ok_or(SelectError::NoElements)
}

/// Loop-accumulated mean, then a second loop from index 1 that keeps the
/// first record with the strictly smallest distance.
///
/// O(n), O(1) beyond the accumulator.
#[allow(clippy::needless_range_loop)]
pub fn closest_to_mean_by_scan(data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
    let first = data.first().ok_or(SelectError::NoElements)?;

    let mut sum = 0.0_f64;
    for i in 0..data.len() {
        sum += data[i].avg_reading_time_ms();
    }
    let mean = sum / data.len() as f64;

    let mut closest = (first.avg_reading_time_ms() - mean).abs();
    let mut closest_record = first;
    for i in 1..data.len() {
        let diff = (data[i].avg_reading_time_ms() - mean).abs();
        if diff >= closest {
            continue;
        }
        closest = diff;
        closest_record = &data[i];
    }
    Ok(closest_record)
}
