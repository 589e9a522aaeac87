//! The telemetry reading every selection variant works on.
//!
//! A [`TelemetryRecord`] is an immutable value: all fields are private and
//! only readable through accessors. Records are produced by
//! [`crate::TelemetryGenerator`] or built directly with
//! [`TelemetryRecord::new`] for fixtures.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use uuid::Uuid;

/// One synthetic telemetry reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    correlation_id: Uuid,
    tag: String,
    avg_reading_time: Duration,
    read_at: SystemTime,
    value: f64,
    is_calibration_data: bool,
}

impl TelemetryRecord {
    pub fn new(
        correlation_id: Uuid,
        tag: impl Into<String>,
        avg_reading_time: Duration,
        read_at: SystemTime,
        value: f64,
        is_calibration_data: bool,
    ) -> Self {
        Self {
            correlation_id,
            tag: tag.into(),
            avg_reading_time,
            read_at,
            value,
            is_calibration_data,
        }
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Average time the reading took. This is the key the minimum variants
    /// compare on.
    pub fn avg_reading_time(&self) -> Duration {
        self.avg_reading_time
    }

    /// [`Self::avg_reading_time`] projected to fractional milliseconds.
    ///
    /// Computed from whole nanoseconds so that integral millisecond durations
    /// map to exact `f64` values. Both closest-to-mean variants go through this
    /// projection, which keeps their arithmetic identical.
    pub fn avg_reading_time_ms(&self) -> f64 {
        self.avg_reading_time.as_nanos() as f64 / 1_000_000.0
    }

    pub fn read_at(&self) -> SystemTime {
        self.read_at
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_calibration_data(&self) -> bool {
        self.is_calibration_data
    }
}

impl fmt::Display for TelemetryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TelemetryRecord {{ correlation_id: {}, tag: {}, avg_reading_time: {}, read_at: {}, value: {:.6}, is_calibration_data: {} }}",
            self.correlation_id,
            self.tag,
            format_duration_ms(self.avg_reading_time),
            format_timestamp(self.read_at),
            self.value,
            self.is_calibration_data
        )
    }
}

/// Render a duration as milliseconds, keeping sub-millisecond precision only
/// when there is some.
pub fn format_duration_ms(d: Duration) -> String {
    if d.subsec_nanos() % 1_000_000 == 0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}ms", d.as_nanos() as f64 / 1_000_000.0)
    }
}

/// Format a timestamp as ISO-8601 UTC with millisecond precision.
/// Example: `2026-02-15T01:30:00.042Z`. Times before the epoch clamp to it.
pub fn format_timestamp(t: SystemTime) -> String {
    let since_epoch = t.duration_since(UNIX_EPOCH).unwrap_or_default();
    let (year, month, day, hour, min, sec) = secs_to_utc(since_epoch.as_secs());
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        month,
        day,
        hour,
        min,
        sec,
        since_epoch.subsec_millis()
    )
}

/// Convert seconds since Unix epoch to (year, month, day, hour, minute, second) UTC.
/// No leap second handling.
fn secs_to_utc(secs: u64) -> (u64, u64, u64, u64, u64, u64) {
    let sec = secs % 60;
    let min = (secs / 60) % 60;
    let hour = (secs / 3600) % 24;

    let mut days = secs / 86400;
    let mut year = 1970u64;

    loop {
        let days_in_year = if is_leap(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }

    let months_days: [u64; 12] = if is_leap(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 0u64;
    for (i, &md) in months_days.iter().enumerate() {
        if days < md {
            month = i as u64 + 1;
            break;
        }
        days -= md;
    }

    (year, month, days + 1, hour, min, sec)
}

fn is_leap(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
