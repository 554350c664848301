//! london — builds the four-line London section, exports it to GraphML, then
//! reloads the file and reports segment-length statistics.
//!
//! Writes `output/london/london_transport.graphml` and
//! `output/london/network_stats.csv`.  Set `RUST_LOG=debug` to see every
//! coordinate re-declaration and edge overwrite.

mod network;
mod output;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use tn_graphml::{read_graphml_file, write_graphml_file};
use tn_network::build_network;
use tn_stats::{CsvReportWriter, NetworkStats, REPORT_CSV, ReportWriter};

use network::load_inputs;
use output::{OUTPUT_DIR, graphml_path, init_logging};

fn main() -> Result<()> {
    init_logging();

    // 1. Build the station graph.
    let (registry, lines) = load_inputs().context("parsing embedded station tables")?;
    let graph = build_network(&registry, &lines).context("building station graph")?;
    println!("Station graph: {} stations, {} segments", graph.node_count(), graph.edge_count());

    // 2. Export.
    std::fs::create_dir_all(OUTPUT_DIR).with_context(|| format!("creating {OUTPUT_DIR}"))?;
    let path = graphml_path();
    write_graphml_file(&graph, &path).context("writing GraphML")?;
    println!("  {} written", path.display());

    // 3. Reload from disk; statistics are computed from what was persisted.
    let reloaded = read_graphml_file(&path).context("reloading GraphML")?;
    info!(nodes = reloaded.node_count(), edges = reloaded.edge_count(), "graph reloaded");

    let stats = NetworkStats::from_graph(&reloaded).context("computing statistics")?;
    let mut writer = CsvReportWriter::new(Path::new(OUTPUT_DIR)).context("creating report")?;
    writer.write_stats(&stats)?;
    writer.finish()?;

    println!();
    println!("{stats}");
    println!("  {OUTPUT_DIR}/{REPORT_CSV} written");

    Ok(())
}
