//! `tn-graphml` — GraphML export and import of station graphs.
//!
//! GraphML is a plain XML exchange format understood by most graph
//! libraries, so a graph written here can be reloaded by any tool that does
//! not share this process.
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`writer`] | `write_graphml`, `to_graphml_string`, `write_graphml_file`  |
//! | [`reader`] | `read_graphml`, `from_graphml_str`, `read_graphml_file`     |
//! | [`keys`]   | `<key>` declarations: attribute domain and type             |
//! | [`error`]  | `GraphMlError`, `GraphMlResult<T>`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tn_graphml::{read_graphml_file, write_graphml_file};
//!
//! write_graphml_file(&graph, Path::new("london_transport.graphml"))?;
//! let reloaded = read_graphml_file(Path::new("london_transport.graphml"))?;
//! assert_eq!(reloaded.edge_count(), graph.edge_count());
//! ```

pub mod error;
pub mod keys;
pub mod reader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{GraphMlError, GraphMlResult};
pub use reader::{from_graphml_str, read_graphml, read_graphml_file};
pub use writer::{to_graphml_string, write_graphml, write_graphml_file};
