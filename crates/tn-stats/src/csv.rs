//! CSV report backend.
//!
//! Creates `network_stats.csv` in the configured output directory:
//!
//! ```csv
//! Metric,Value
//! Total Length (km),22.172896906774998
//! Average Distance (km),1.1086448453387499
//! Standard Deviation (km),0.7240041189199148
//! ```
//!
//! Values use the shortest decimal form that parses back to the same `f64`.

use std::fs::File;
use std::path::Path;

use csv::{Reader, Writer};

use crate::row::{Metric, StatRow};
use crate::writer::ReportWriter;
use crate::{NetworkStats, StatsError, StatsResult};

/// File name of the CSV report inside the output directory.
pub const REPORT_CSV: &str = "network_stats.csv";

const HEADER: [&str; 2] = ["Metric", "Value"];

/// Writes the statistics table to `network_stats.csv`.
///
/// The file holds exactly one report: a second [`write_stats`] call fails
/// with [`StatsError::Report`] instead of appending rows.
///
/// [`write_stats`]: ReportWriter::write_stats
pub struct CsvReportWriter {
    writer:   Writer<File>,
    written:  bool,
    finished: bool,
}

impl CsvReportWriter {
    /// Create (or truncate) `network_stats.csv` in `dir` and write the header.
    pub fn new(dir: &Path) -> StatsResult<Self> {
        let mut writer = Writer::from_path(dir.join(REPORT_CSV))?;
        writer.write_record(HEADER)?;
        Ok(Self { writer, written: false, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_stats(&mut self, stats: &NetworkStats) -> StatsResult<()> {
        if self.written {
            return Err(StatsError::Report(format!("{REPORT_CSV} already holds a report")));
        }
        self.written = true;
        for row in stats.rows() {
            let value = row.value.to_string();
            self.writer.write_record([row.metric.label(), value.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> StatsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

/// Read a report written by [`CsvReportWriter`] back into rows.
pub fn read_report_csv(path: &Path) -> StatsResult<Vec<StatRow>> {
    let mut rdr = Reader::from_path(path)?;
    if rdr.headers()?.iter().ne(HEADER) {
        return Err(StatsError::Report(format!(
            "{}: expected header {HEADER:?}",
            path.display()
        )));
    }

    rdr.records()
        .map(|record| {
            let record = record?;
            let (Some(metric), Some(value)) = (record.get(0), record.get(1)) else {
                return Err(StatsError::Report(format!("short row {record:?}")));
            };
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|_| StatsError::Report(format!("{metric}: {value:?} is not a number")))?;
            Ok(StatRow { metric: metric.parse::<Metric>()?, value })
        })
        .collect()
}
