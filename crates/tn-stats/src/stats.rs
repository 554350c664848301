//! Edge-weight statistics.

use std::fmt;

use tracing::info;

use tn_network::{ATTR_WEIGHT, TransitGraph};

use crate::row::{Metric, StatRow};
use crate::{StatsError, StatsResult};

/// Collect one weight per edge, in edge order.
///
/// Weights stored as text are parsed back.  An edge without a `weight`
/// attribute, or whose weight is not a finite number, is an error naming
/// that edge.
pub fn edge_weights(graph: &TransitGraph) -> StatsResult<Vec<f64>> {
    graph
        .edges()
        .map(|e| {
            let raw = e.attrs.get(ATTR_WEIGHT).ok_or_else(|| StatsError::MissingWeight {
                from: e.source().to_owned(),
                to:   e.target().to_owned(),
            })?;
            match raw.as_f64() {
                Some(w) if w.is_finite() => Ok(w),
                _ => Err(StatsError::InvalidWeight {
                    from:  e.source().to_owned(),
                    to:    e.target().to_owned(),
                    value: raw.to_string(),
                }),
            }
        })
        .collect()
}

/// Total, mean and population standard deviation of segment lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkStats {
    pub edge_count: usize,
    pub total_km:   f64,
    pub mean_km:    f64,
    /// Population standard deviation (divisor = edge count).
    pub std_km:     f64,
}

impl NetworkStats {
    /// Compute statistics over `weights`.  Order does not matter.
    ///
    /// Returns [`StatsError::Empty`] for an empty slice rather than NaN.
    pub fn from_weights(weights: &[f64]) -> StatsResult<Self> {
        if weights.is_empty() {
            return Err(StatsError::Empty);
        }
        let n = weights.len() as f64;
        let total: f64 = weights.iter().sum();
        let mean = total / n;
        let variance = weights.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            edge_count: weights.len(),
            total_km:   total,
            mean_km:    mean,
            std_km:     variance.sqrt(),
        })
    }

    /// Compute statistics over every edge weight of `graph`.
    pub fn from_graph(graph: &TransitGraph) -> StatsResult<Self> {
        let stats = Self::from_weights(&edge_weights(graph)?)?;
        info!(
            edges = stats.edge_count,
            total_km = stats.total_km,
            mean_km = stats.mean_km,
            std_km = stats.std_km,
            "network statistics computed"
        );
        Ok(stats)
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalLength => self.total_km,
            Metric::AverageDistance => self.mean_km,
            Metric::StandardDeviation => self.std_km,
        }
    }

    /// Report rows in the fixed order Total, Average, Standard Deviation.
    pub fn rows(&self) -> [StatRow; 3] {
        Metric::ALL.map(|metric| StatRow { metric, value: self.value(metric) })
    }
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total length of the transport network: {:.2} km", self.total_km)?;
        writeln!(f, "Average distance between stations: {:.2} km", self.mean_km)?;
        write!(f, "Standard deviation of distances: {:.2} km", self.std_km)
    }
}
