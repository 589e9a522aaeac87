pub mod bench;
pub mod generate;
pub mod playground;
pub mod select;
pub mod variants;

use telemetry_select_core::{Direction, Family, SelectError, TelemetryGenerator, Variant};

/// What every command handler returns; `main` prints the error and exits 1.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Build a generator, seeded when a seed is given.
pub fn make_generator(seed: Option<u64>) -> TelemetryGenerator {
    match seed {
        Some(s) => TelemetryGenerator::seeded(s),
        None => TelemetryGenerator::from_os_rng(),
    }
}

/// Parse a `--variant` value: a single name, or "all" for every variant.
pub fn parse_variants(s: &str) -> Result<Vec<Variant>, SelectError> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(Variant::ALL.to_vec());
    }
    s.split(',').map(|name| name.parse::<Variant>()).collect()
}

/// Parse a `--suite` value into the families to benchmark.
pub fn parse_suite(s: &str) -> Result<Vec<Family>, SelectError> {
    match s {
        "all" => Ok(Family::ALL.to_vec()),
        other => Ok(vec![other.parse::<Family>()?]),
    }
}

pub fn direction(descending: bool) -> Direction {
    if descending {
        Direction::Descending
    } else {
        Direction::Ascending
    }
}

/// Human-friendly nanoseconds: ns / µs / ms / s.
pub fn format_ns(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{ns:.1} ns")
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

/// Human-friendly byte count, or "-" when not measured.
pub fn format_bytes(bytes: Option<u64>) -> String {
    let Some(b) = bytes else {
        return "-".to_string();
    };
    let units = ["B", "KiB", "MiB", "GiB"];
    let mut v = b as f64;
    let mut idx = 0usize;
    while v >= 1024.0 && idx < units.len() - 1 {
        v /= 1024.0;
        idx += 1;
    }
    if idx == 0 {
        format!("{b} B")
    } else {
        format!("{v:.2} {}", units[idx])
    }
}
