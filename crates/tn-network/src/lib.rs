//! `tn-network` — station registry, lines, and the weighted station graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`registry`] | `StationRegistry` (ordered registration log), `ResolvedStations` |
//! | [`line`]     | `Line` — an ordered station sequence plus display colour     |
//! | [`attr`]     | `AttrValue`, `Attrs`, attribute-name constants               |
//! | [`graph`]    | `TransitGraph`, `Node`, `Edge`, `EdgeKey`                    |
//! | [`builder`]  | `NetworkBuilder`, `build_network`                            |
//! | [`loader`]   | CSV loaders for station and line tables                      |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `tn-core` types.        |

pub mod attr;
pub mod builder;
pub mod error;
pub mod graph;
pub mod line;
pub mod loader;
pub mod registry;


pub use attr::{ATTR_COLOR, ATTR_LINE, ATTR_POS, ATTR_WEIGHT, AttrValue, Attrs};
pub use builder::{NetworkBuilder, build_network};
pub use error::{NetworkError, NetworkResult};
pub use graph::{Edge, EdgeKey, Node, TransitGraph};
pub use line::Line;
pub use loader::{load_lines_csv, load_lines_reader, load_stations_csv, load_stations_reader};
pub use registry::{Registration, ResolvedStations, StationRegistry};
