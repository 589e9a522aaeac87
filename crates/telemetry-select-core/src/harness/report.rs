//! Ranked benchmark results.
//!
//! The harness produces a [`BenchmarkReport`]; rendering it as a table is up
//! to the caller. Reports serialize to JSON for machine consumption.

use std::time::Duration;

use serde::Serialize;
use statrs::statistics::{Data, Distribution, Max, Median, Min};

use crate::error::Result;
use crate::select::{Family, Variant};

/// Summary of the per-call timings of one case, in nanoseconds.
#[derive(Debug, Clone, Serialize)]
pub struct TimingStats {
    pub mean_ns: f64,
    pub median_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: f64,
    pub max_ns: f64,
    pub samples: usize,
}

impl TimingStats {
    /// Summarize raw samples. `None` when there are none.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let data = Data::new(
            samples
                .iter()
                .map(|d| d.as_nanos() as f64)
                .collect::<Vec<f64>>(),
        );
        let mean_ns = data.mean()?;
        // Sample std dev is undefined below two samples.
        let std_dev_ns = data.std_dev().filter(|s| s.is_finite()).unwrap_or(0.0);
        Some(Self {
            mean_ns,
            median_ns: data.median(),
            std_dev_ns,
            min_ns: data.min(),
            max_ns: data.max(),
            samples: samples.len(),
        })
    }

    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_ns.max(0.0).round() as u64)
    }
}

/// One measured case in a report.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkEntry {
    /// 1-based position, fastest first.
    pub rank: usize,
    pub name: String,
    pub variant: Variant,
    pub family: Family,
    /// Dataset generation happened inside the timed region.
    pub control: bool,
    pub timing: TimingStats,
    /// Bytes allocated per call, when allocation tracking is installed.
    pub allocated_bytes_per_op: Option<u64>,
    /// Mean time relative to the fastest entry (1.0 for the fastest).
    pub ratio_to_fastest: f64,
}

/// Measured, not yet ranked.
#[derive(Debug, Clone)]
pub(crate) struct CaseMeasurement {
    pub name: String,
    pub variant: Variant,
    pub control: bool,
    pub timing: TimingStats,
    pub allocated_bytes_per_op: Option<u64>,
}

/// Entries of one harness run ordered fastest to slowest.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub title: String,
    pub dataset_size: usize,
    pub warmup_iterations: usize,
    pub iterations: usize,
    pub entries: Vec<BenchmarkEntry>,
}

impl BenchmarkReport {
    /// Rank measurements strictly by mean elapsed time, ascending.
    /// Equal means keep the order the cases were run in.
    pub(crate) fn ranked(
        title: impl Into<String>,
        dataset_size: usize,
        warmup_iterations: usize,
        iterations: usize,
        mut measurements: Vec<CaseMeasurement>,
    ) -> Self {
        measurements.sort_by(|a, b| a.timing.mean_ns.total_cmp(&b.timing.mean_ns));
        let fastest = measurements
            .first()
            .map(|m| m.timing.mean_ns)
            .unwrap_or(0.0);

        let entries = measurements
            .into_iter()
            .enumerate()
            .map(|(i, m)| BenchmarkEntry {
                rank: i + 1,
                family: m.variant.family(),
                ratio_to_fastest: if fastest > 0.0 {
                    m.timing.mean_ns / fastest
                } else {
                    1.0
                },
                name: m.name,
                variant: m.variant,
                control: m.control,
                timing: m.timing,
                allocated_bytes_per_op: m.allocated_bytes_per_op,
            })
            .collect();

        Self {
            title: title.into(),
            dataset_size,
            warmup_iterations,
            iterations,
            entries,
        }
    }

    pub fn fastest(&self) -> Option<&BenchmarkEntry> {
        self.entries.first()
    }

    pub fn entry(&self, name: &str) -> Option<&BenchmarkEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(name: &str, variant: Variant, mean_ns: u64) -> CaseMeasurement {
        CaseMeasurement {
            name: name.to_string(),
            variant,
            control: false,
            timing: TimingStats::from_samples(&[Duration::from_nanos(mean_ns)]).unwrap(),
            allocated_bytes_per_op: None,
        }
    }

    // -----------------------------------------------------------------------
    // TimingStats
    // -----------------------------------------------------------------------

    #[test]
    fn test_stats_empty_is_none() {
        assert!(TimingStats::from_samples(&[]).is_none());
    }

    #[test]
    fn test_stats_known_values() {
        let samples: Vec<Duration> = [10, 20, 30, 40].map(Duration::from_nanos).to_vec();
        let s = TimingStats::from_samples(&samples).unwrap();
        assert_eq!(s.samples, 4);
        assert!((s.mean_ns - 25.0).abs() < 1e-9);
        assert!((s.median_ns - 25.0).abs() < 1e-9);
        assert_eq!(s.min_ns, 10.0);
        assert_eq!(s.max_ns, 40.0);
        // sample std dev of 10,20,30,40
        assert!((s.std_dev_ns - 12.909_944).abs() < 1e-3);
        assert_eq!(s.mean(), Duration::from_nanos(25));
    }

    #[test]
    fn test_stats_single_sample_has_zero_spread() {
        let s = TimingStats::from_samples(&[Duration::from_micros(3)]).unwrap();
        assert_eq!(s.mean_ns, 3_000.0);
        assert_eq!(s.std_dev_ns, 0.0);
    }

    // -----------------------------------------------------------------------
    // Ranking
    // -----------------------------------------------------------------------

    #[test]
    fn test_ranked_fastest_to_slowest() {
        let report = BenchmarkReport::ranked(
            "fastest",
            10,
            1,
            1,
            vec![
                measurement("slow", Variant::FastestByRecomputedMin, 900),
                measurement("quick", Variant::FastestByIterScan, 100),
                measurement("middle", Variant::FastestBySort, 300),
            ],
        );
        let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["quick", "middle", "slow"]);
        let ranks: Vec<usize> = report.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(report.fastest().unwrap().name, "quick");
        assert!((report.entry("slow").unwrap().ratio_to_fastest - 9.0).abs() < 1e-9);
        assert_eq!(report.entry("quick").unwrap().ratio_to_fastest, 1.0);
    }

    #[test]
    fn test_ranked_ties_keep_run_order() {
        let report = BenchmarkReport::ranked(
            "t",
            1,
            0,
            1,
            vec![
                measurement("a", Variant::FastestBySort, 50),
                measurement("b", Variant::FastestByIterScan, 50),
            ],
        );
        assert_eq!(report.entries[0].name, "a");
        assert_eq!(report.entries[1].name, "b");
    }

    #[test]
    fn test_report_json_shape() {
        let report = BenchmarkReport::ranked(
            "closest-to-mean",
            1000,
            3,
            100,
            vec![measurement("x", Variant::ClosestToMeanByScan, 10)],
        );
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["dataset_size"], 1000);
        assert_eq!(json["entries"][0]["variant"], "closest-to-mean-by-scan");
        assert_eq!(json["entries"][0]["family"], "closest-to-mean");
        assert!(json["entries"][0]["allocated_bytes_per_op"].is_null());
    }
}
