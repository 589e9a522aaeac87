//! Ordered views over a dataset, used for listings.
//!
//! These return a new `Vec` of references; the dataset itself is never
//! reordered. Sorts are stable, so equal keys keep their input order in both
//! directions.

use std::cmp::Ordering;
use std::fmt;

use crate::record::TelemetryRecord;

/// Sort direction for the ordering helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

/// Records ordered by `avg_reading_time`.
pub fn sort_by_avg_reading_time(
    data: &[TelemetryRecord],
    direction: Direction,
) -> Vec<&TelemetryRecord> {
    let mut sorted: Vec<&TelemetryRecord> = data.iter().collect();
    sorted.sort_by(|a, b| direction.apply(a.avg_reading_time().cmp(&b.avg_reading_time())));
    sorted
}

/// Records ordered by `read_at`.
pub fn sort_by_read_at(data: &[TelemetryRecord], direction: Direction) -> Vec<&TelemetryRecord> {
    let mut sorted: Vec<&TelemetryRecord> = data.iter().collect();
    sorted.sort_by(|a, b| direction.apply(a.read_at().cmp(&b.read_at())));
    sorted
}

/// One record per line, in the order given.
pub struct Listing<I>(pub I);

impl<I> fmt::Display for Listing<I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.0.clone() {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}
