//! SQLite report backend (feature `sqlite`).
//!
//! Creates `network_stats.db` in the configured output directory with one
//! table, `network_stats(metric, value)`.  Writing again replaces the rows.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{NetworkStats, StatsResult};

/// File name of the SQLite report inside the output directory.
pub const REPORT_DB: &str = "network_stats.db";

/// Writes the statistics table to an SQLite database.
pub struct SqliteReportWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReportWriter {
    /// Open (or create) `network_stats.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> StatsResult<Self> {
        let conn = Connection::open(dir.join(REPORT_DB))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS network_stats (
                 position INTEGER PRIMARY KEY,
                 metric   TEXT    NOT NULL UNIQUE,
                 value    REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReportWriter {
    fn write_stats(&mut self, stats: &NetworkStats) -> StatsResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO network_stats (position, metric, value) \
                 VALUES (?1, ?2, ?3)",
            )?;
            for (i, row) in stats.rows().iter().enumerate() {
                stmt.execute(rusqlite::params![i as i64, row.metric.label(), row.value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> StatsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.cache_flush()?;
        Ok(())
    }
}
