//! Builds a [`TransitGraph`] from a station registry and line definitions.

use tracing::{debug, info, warn};

use tn_core::haversine_km;

use crate::attr::{ATTR_COLOR, ATTR_LINE, ATTR_POS, ATTR_WEIGHT, AttrValue, Attrs};
use crate::{Line, NetworkError, NetworkResult, ResolvedStations, StationRegistry, TransitGraph};

/// Construct a [`TransitGraph`] line by line, then call [`build`](Self::build).
///
/// The registry is resolved once up front, so every line sees the final
/// (last-declared) coordinate of each station.  Every registered station
/// becomes a node with a `pos` attribute, even if no line references it.
/// Lines are processed in call order; a segment declared by two lines keeps
/// the weight and colour of the later one.
///
/// # Example
///
/// ```
/// use tn_core::GeoPoint;
/// use tn_network::{Line, NetworkBuilder, StationRegistry};
///
/// let mut reg = StationRegistry::new();
/// reg.register("Hyde Park Corner", GeoPoint::new(51.5027, -0.1526))
///    .register("Green Park", GeoPoint::new(51.5069, -0.1426));
///
/// let mut b = NetworkBuilder::new(&reg);
/// b.add_line(&Line::new("Piccadilly", "blue", ["Hyde Park Corner", "Green Park"]))?;
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// # Ok::<(), tn_network::NetworkError>(())
/// ```
pub struct NetworkBuilder {
    stations: ResolvedStations,
    graph:    TransitGraph,
    lines:    usize,
}

impl NetworkBuilder {
    pub fn new(registry: &StationRegistry) -> Self {
        let stations = registry.resolve();
        let mut graph = TransitGraph::new();
        for (name, pos) in stations.iter() {
            graph.add_node(name).insert(ATTR_POS.to_owned(), AttrValue::Point(pos));
        }
        Self { stations, graph, lines: 0 }
    }

    /// Add every segment of `line`, weighted by haversine distance.
    ///
    /// All stations of the line are looked up before any edge is written, so
    /// an unknown station leaves the graph untouched and fails with
    /// [`NetworkError::UnknownStation`].  A line with fewer than two stations
    /// adds no edges.  A station repeated back-to-back would be a self-loop
    /// and is skipped with a warning.
    pub fn add_line(&mut self, line: &Line) -> NetworkResult<()> {
        let positions = line
            .stations
            .iter()
            .map(|s| {
                self.stations.get(s).ok_or_else(|| NetworkError::UnknownStation {
                    line:    line.name.clone(),
                    station: s.clone(),
                })
            })
            .collect::<NetworkResult<Vec<_>>>()?;

        for station in &line.stations {
            self.graph.add_node(station);
        }

        for ((a, b), w) in line.segments().zip(positions.windows(2)) {
            if a == b {
                warn!(line = %line.name, station = a, "skipping self-loop segment");
                continue;
            }

            let mut attrs = Attrs::new();
            attrs.insert(ATTR_WEIGHT.to_owned(), AttrValue::Float(haversine_km(w[0], w[1])));
            attrs.insert(ATTR_LINE.to_owned(), AttrValue::from(line.name.as_str()));
            attrs.insert(ATTR_COLOR.to_owned(), AttrValue::from(line.color.as_str()));

            if let Some(old) = self.graph.upsert_edge(a, b, attrs) {
                debug!(
                    from = a,
                    to = b,
                    previous_line = old.get(ATTR_LINE).and_then(|v| v.as_str()).unwrap_or("-"),
                    line = %line.name,
                    "segment re-declared; later line overwrites"
                );
            }
        }

        self.lines += 1;
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.graph.node_count() }
    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    /// Consume the builder and return the finished graph.
    pub fn build(self) -> TransitGraph {
        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            lines = self.lines,
            "station graph built"
        );
        self.graph
    }
}

/// Build a graph from `registry` and `lines`, processing lines in slice order.
///
/// Fails on the first line that references an unregistered station.
pub fn build_network(registry: &StationRegistry, lines: &[Line]) -> NetworkResult<TransitGraph> {
    let mut b = NetworkBuilder::new(registry);
    for line in lines {
        b.add_line(line)?;
    }
    Ok(b.build())
}
