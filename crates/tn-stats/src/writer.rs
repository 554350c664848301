//! The `ReportWriter` trait implemented by all report backends.

use crate::{NetworkStats, StatsResult};

/// Trait implemented by the CSV and SQLite report writers.
pub trait ReportWriter {
    /// Write the three metric rows of `stats`.
    ///
    /// A report holds one set of rows.  The CSV backend rejects a second
    /// call; the SQLite backend replaces the previous rows.
    fn write_stats(&mut self, stats: &NetworkStats) -> StatsResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> StatsResult<()>;
}
