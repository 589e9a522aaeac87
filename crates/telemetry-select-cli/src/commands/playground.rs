use std::fmt::Write as _;
use std::time::Duration;

use telemetry_select_core::{
    Direction, Family, Listing, TelemetryGenerator, TelemetryRecord, format_duration_ms,
    sort_by_avg_reading_time,
};

use super::CommandResult;

const SAMPLE_SIZE: usize = 10;
const SECTION_RULE: &str = "----------------|";
const LISTING_RULE: &str = "--------------------";

pub fn run(seed: Option<u64>) -> CommandResult {
    let mut generator = super::make_generator(seed);
    print!("{}", data_generation(&mut generator)?);
    print!("{}", fastest_telemetry(&generator.generate(SAMPLE_SIZE)?)?);
    print!("{}", closest_to_mean(&generator.generate(SAMPLE_SIZE)?)?);
    Ok(())
}

fn data_generation(generator: &mut TelemetryGenerator) -> Result<String, Box<dyn std::error::Error>> {
    let data = generator.generate(SAMPLE_SIZE)?;
    let mut out = format!("{SECTION_RULE} Data Generation\n");
    out.push_str(&Listing(sort_by_avg_reading_time(&data, Direction::Ascending)).to_string());
    Ok(out)
}

/// Every minimum variant on the same dataset, then the dataset by reading time.
pub fn fastest_telemetry(data: &[TelemetryRecord]) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = format!("{SECTION_RULE} Fastest Telemetry\n");
    for v in Family::Fastest.variants() {
        writeln!(out, "{}: {}", v.name(), v.select(data)?)?;
    }
    writeln!(out, "{LISTING_RULE}")?;
    out.push_str(&Listing(sort_by_avg_reading_time(data, Direction::Ascending)).to_string());
    Ok(out)
}

/// Mean reading time, both closest-to-mean variants, then the sorted dataset.
pub fn closest_to_mean(data: &[TelemetryRecord]) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = format!("{SECTION_RULE} Closest to Mean\n");
    let mean_ms = mean_ms(data);
    let picks = Family::ClosestToMean
        .variants()
        .map(|v| v.select(data).map(|r| (v, r)))
        .collect::<Result<Vec<_>, _>>()?;

    write!(
        out,
        "Mean: {mean_ms} - {}",
        format_duration_ms(Duration::from_secs_f64(mean_ms / 1_000.0))
    )?;
    for (v, r) in &picks {
        write!(out, " | {}: {}", v.name(), format_duration_ms(r.avg_reading_time()))?;
    }
    writeln!(out)?;
    for (_, r) in &picks {
        writeln!(out, "{r}")?;
    }
    writeln!(out, "{LISTING_RULE}")?;
    out.push_str(&Listing(sort_by_avg_reading_time(data, Direction::Ascending)).to_string());
    Ok(out)
}

fn mean_ms(data: &[TelemetryRecord]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|r| r.avg_reading_time_ms()).sum::<f64>() / data.len() as f64
}
