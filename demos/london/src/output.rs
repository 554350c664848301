//! Output locations and logging setup shared by both binaries.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub const OUTPUT_DIR:   &str = "output/london";
pub const GRAPHML_FILE: &str = "london_transport.graphml";

pub fn graphml_path() -> PathBuf {
    Path::new(OUTPUT_DIR).join(GRAPHML_FILE)
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
