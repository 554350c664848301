//! Report row types.

use std::fmt;
use std::str::FromStr;

use crate::StatsError;

/// The three reported metrics, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalLength,
    AverageDistance,
    StandardDeviation,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::TotalLength, Metric::AverageDistance, Metric::StandardDeviation];

    /// Label written in the `Metric` column.
    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalLength => "Total Length (km)",
            Metric::AverageDistance => "Average Distance (km)",
            Metric::StandardDeviation => "Standard Deviation (km)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, StatsError> {
        Metric::ALL
            .into_iter()
            .find(|m| m.label() == s.trim())
            .ok_or_else(|| StatsError::Report(format!("unknown metric {s:?}")))
    }
}

/// One `(Metric, Value)` line of the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRow {
    pub metric: Metric,
    pub value:  f64,
}
