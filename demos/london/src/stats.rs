//! london_stats — reloads the GraphML written by `london` and recomputes the
//! statistics report without rebuilding the graph.

mod output;

use std::path::Path;

use anyhow::{Context, Result};

use tn_graphml::read_graphml_file;
use tn_stats::{CsvReportWriter, NetworkStats, REPORT_CSV, ReportWriter};

use output::{OUTPUT_DIR, graphml_path, init_logging};

fn main() -> Result<()> {
    init_logging();

    let path = graphml_path();
    let graph = read_graphml_file(&path)
        .with_context(|| format!("loading {} (run `london` first)", path.display()))?;
    println!("Loaded {}: {} stations, {} segments", path.display(), graph.node_count(), graph.edge_count());

    let stats = NetworkStats::from_graph(&graph).context("computing statistics")?;
    let mut writer = CsvReportWriter::new(Path::new(OUTPUT_DIR)).context("creating report")?;
    writer.write_stats(&stats)?;
    writer.finish()?;

    println!("{stats}");
    println!("Statistics saved to {OUTPUT_DIR}/{REPORT_CSV}");

    Ok(())
}
