//! Selection variants and their catalogue.
//!
//! Two families of semantically equivalent strategies:
//!
//! - [`Family::Fastest`]: the record with the smallest `avg_reading_time`
//!   (five variants, see [`fastest`]).
//! - [`Family::ClosestToMean`]: the record whose reading time is closest to
//!   the dataset mean (two variants, see [`closest`]).
//!
//! Every variant borrows its result from the input and never reorders it.
//! Ties always go to the lowest index.

pub mod closest;
pub mod fastest;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SelectError};
use crate::record::TelemetryRecord;

pub use closest::{closest_to_mean_by_scan, closest_to_mean_by_sort};
pub use fastest::{
    fastest_by_indexed_scan, fastest_by_iter_scan, fastest_by_precomputed_min,
    fastest_by_recomputed_min, fastest_by_sort,
};

/// Which selection problem a variant solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Fastest,
    ClosestToMean,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Fastest, Family::ClosestToMean];

    pub fn name(self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::ClosestToMean => "closest-to-mean",
        }
    }

    /// Variants belonging to this family, in catalogue order.
    pub fn variants(self) -> impl Iterator<Item = Variant> {
        Variant::ALL.into_iter().filter(move |v| v.family() == self)
    }

    /// The variant the benchmark control group runs: the manual indexed
    /// loop of the family.
    pub fn control_variant(self) -> Variant {
        match self {
            Self::Fastest => Variant::FastestByIndexedScan,
            Self::ClosestToMean => Variant::ClosestToMeanByScan,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fastest" | "min" => Ok(Self::Fastest),
            "closest" | "closest-to-mean" | "mean" => Ok(Self::ClosestToMean),
            _ => Err(SelectError::invalid_argument(format!(
                "unknown family '{s}' (expected fastest or closest)"
            ))),
        }
    }
}

/// One named selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    FastestBySort,
    FastestByRecomputedMin,
    FastestByPrecomputedMin,
    FastestByIterScan,
    FastestByIndexedScan,
    ClosestToMeanBySort,
    ClosestToMeanByScan,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::FastestBySort,
        Variant::FastestByRecomputedMin,
        Variant::FastestByPrecomputedMin,
        Variant::FastestByIterScan,
        Variant::FastestByIndexedScan,
        Variant::ClosestToMeanBySort,
        Variant::ClosestToMeanByScan,
    ];

    /// Stable kebab-case name, accepted back by [`Variant::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Self::FastestBySort => "fastest-by-sort",
            Self::FastestByRecomputedMin => "fastest-by-recomputed-min",
            Self::FastestByPrecomputedMin => "fastest-by-precomputed-min",
            Self::FastestByIterScan => "fastest-by-iter-scan",
            Self::FastestByIndexedScan => "fastest-by-indexed-scan",
            Self::ClosestToMeanBySort => "closest-to-mean-by-sort",
            Self::ClosestToMeanByScan => "closest-to-mean-by-scan",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::FastestBySort
            | Self::FastestByRecomputedMin
            | Self::FastestByPrecomputedMin
            | Self::FastestByIterScan
            | Self::FastestByIndexedScan => Family::Fastest,
            Self::ClosestToMeanBySort | Self::ClosestToMeanByScan => Family::ClosestToMean,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::FastestBySort => "sort ascending by reading time, take the first (O(n log n))",
            Self::FastestByRecomputedMin => {
                "first match of the minimum, recomputed per element (O(n^2))"
            }
            Self::FastestByPrecomputedMin => "compute the minimum once, then find it (O(n))",
            Self::FastestByIterScan => "single iterator pass with a running minimum (O(n))",
            Self::FastestByIndexedScan => "single indexed pass with a running minimum (O(n))",
            Self::ClosestToMeanBySort => "aggregate mean, sort by distance, take the first",
            Self::ClosestToMeanByScan => "loop-summed mean, second loop keeps the closest",
        }
    }

    /// Run this variant over `data`.
    pub fn select(self, data: &[TelemetryRecord]) -> Result<&TelemetryRecord> {
        match self {
            Self::FastestBySort => fastest_by_sort(data),
            Self::FastestByRecomputedMin => fastest_by_recomputed_min(data),
            Self::FastestByPrecomputedMin => fastest_by_precomputed_min(data),
            Self::FastestByIterScan => fastest_by_iter_scan(data),
            Self::FastestByIndexedScan => fastest_by_indexed_scan(data),
            Self::ClosestToMeanBySort => closest_to_mean_by_sort(data),
            Self::ClosestToMeanByScan => closest_to_mean_by_scan(data),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| SelectError::UnknownVariant(s.to_string()))
    }
}
