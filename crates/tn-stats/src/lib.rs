//! `tn-stats` — distance statistics over a station graph's edge weights.
//!
//! [`NetworkStats`] is computed from any [`tn_network::TransitGraph`],
//! typically one reloaded from GraphML, and reported through a
//! [`ReportWriter`] backend:
//!
//! | Feature   | Backend     | File created          |
//! |-----------|-------------|-----------------------|
//! | *(none)*  | CSV         | `network_stats.csv`   |
//! | `sqlite`  | SQLite      | `network_stats.db`    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tn_stats::{CsvReportWriter, NetworkStats, ReportWriter};
//!
//! let stats = NetworkStats::from_graph(&graph)?;
//! let mut w = CsvReportWriter::new(Path::new("./output"))?;
//! w.write_stats(&stats)?;
//! w.finish()?;
//! println!("{stats}");
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod stats;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::{CsvReportWriter, REPORT_CSV, read_report_csv};
pub use error::{StatsError, StatsResult};
pub use row::{Metric, StatRow};
pub use stats::{NetworkStats, edge_weights};
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::{REPORT_DB, SqliteReportWriter};
