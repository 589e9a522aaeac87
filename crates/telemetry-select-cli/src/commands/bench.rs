use std::fmt::Write as _;
use std::path::Path;

use telemetry_select_core::{BenchmarkHarness, BenchmarkReport, HarnessConfig, allocated_bytes};

use super::CommandResult;

pub struct BenchCommandConfig<'a> {
    pub suite: &'a str,
    pub size: usize,
    pub iterations: usize,
    pub warmup: usize,
    pub include_control: bool,
    pub seed: Option<u64>,
    pub output_path: Option<&'a str>,
}

pub fn run(cfg: BenchCommandConfig<'_>) -> CommandResult {
    let families = super::parse_suite(cfg.suite)?;
    let harness = BenchmarkHarness::new(HarnessConfig {
        dataset_size: cfg.size,
        warmup_iterations: cfg.warmup,
        iterations: cfg.iterations,
        include_control: cfg.include_control,
    })?;
    let mut generator = super::make_generator(cfg.seed);

    println!(
        "Benchmarking {} suite(s) on {} records per dataset...\n",
        families.len(),
        cfg.size
    );

    let mut reports = Vec::with_capacity(families.len());
    for family in families {
        let report = harness.run_family(family, &mut generator)?;
        print!("{}", render_report(&report));
        reports.push(report);
    }

    if allocated_bytes().is_none() {
        println!("Allocation tracking unavailable; Alloc/op not measured.");
    }
    println!("Control cases generate their dataset inside the timed region.");

    if let Some(path) = cfg.output_path {
        write_reports(Path::new(path), &reports)?;
        println!("\nReport written to {path}");
    }
    Ok(())
}

/// Ranked table, fastest first.
pub fn render_report(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} records, {} measured calls ({} warmup)",
        report.title, report.dataset_size, report.iterations, report.warmup_iterations
    );
    let _ = writeln!(out, "{}", "=".repeat(96));
    let _ = writeln!(
        out,
        "{:>4}  {:<36} {:>11} {:>11} {:>11} {:>8} {:>10}",
        "Rank", "Variant", "Mean", "Median", "StdDev", "Ratio", "Alloc/op"
    );
    let _ = writeln!(out, "{}", "-".repeat(96));
    for e in &report.entries {
        let _ = writeln!(
            out,
            "{:>4}  {:<36} {:>11} {:>11} {:>11} {:>7.2}x {:>10}",
            e.rank,
            e.name,
            super::format_ns(e.timing.mean_ns),
            super::format_ns(e.timing.median_ns),
            super::format_ns(e.timing.std_dev_ns),
            e.ratio_to_fastest,
            super::format_bytes(e.allocated_bytes_per_op)
        );
    }
    let _ = writeln!(out);
    out
}

/// Write every report as one pretty-printed JSON array.
pub fn write_reports(path: &Path, reports: &[BenchmarkReport]) -> CommandResult {
    let json = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, json)?;
    log::info!("wrote {} report(s) to {}", reports.len(), path.display());
    Ok(())
}
