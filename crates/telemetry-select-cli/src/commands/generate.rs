use telemetry_select_core::{
    Listing, TelemetryRecord, format_duration_ms, sort_by_avg_reading_time, sort_by_read_at,
};

use super::CommandResult;

pub fn run(count: usize, seed: Option<u64>, sort: Option<&str>, descending: bool) -> CommandResult {
    let data = super::make_generator(seed).generate(count)?;
    print!("{}", render(&data, sort, descending));
    println!("{}", summary(&data));
    Ok(())
}

/// Listing of `data`, optionally ordered by `avg` or `read-at`.
pub fn render(data: &[TelemetryRecord], sort: Option<&str>, descending: bool) -> String {
    let direction = super::direction(descending);
    match sort {
        Some("avg") => Listing(sort_by_avg_reading_time(data, direction)).to_string(),
        Some("read-at") => Listing(sort_by_read_at(data, direction)).to_string(),
        _ => Listing(data).to_string(),
    }
}

fn summary(data: &[TelemetryRecord]) -> String {
    let calibration = data.iter().filter(|r| r.is_calibration_data()).count();
    let min = data.iter().map(|r| r.avg_reading_time()).min();
    let max = data.iter().map(|r| r.avg_reading_time()).max();
    match (min, max) {
        (Some(min), Some(max)) => format!(
            "\n{} records, {} calibration, avg_reading_time {}..{}",
            data.len(),
            calibration,
            format_duration_ms(min),
            format_duration_ms(max)
        ),
        _ => "\n0 records".to_string(),
    }
}
