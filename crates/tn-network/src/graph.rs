//! Weighted undirected station graph.
//!
//! # Data layout
//!
//! Nodes are kept in insertion order in a `Vec<Node>` with a name → index map
//! beside it, so enumeration order is the order in which stations were first
//! seen.  Edges live in a `BTreeMap` keyed by [`EdgeKey`], the canonical
//! (sorted) station-name pair: `A–B` and `B–A` are the same entry, and edge
//! enumeration is sorted and reproducible.
//!
//! Writing an edge is an explicit insert-or-update: the last write for a pair
//! wins, whichever line it came from.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tn_core::GeoPoint;

use crate::attr::{ATTR_POS, ATTR_WEIGHT, Attrs};

// ── EdgeKey ───────────────────────────────────────────────────────────────────

/// Unordered station-name pair, stored with the lexicographically smaller
/// name first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    first:  String,
    second: String,
}

impl EdgeKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// The endpoint opposite `name`, or `None` if `name` is not an endpoint.
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }

    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}–{:?}", self.first, self.second)
    }
}

// ── Node / Edge ───────────────────────────────────────────────────────────────

/// A station node.  Identity is the name; everything else is an attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name:  String,
    pub attrs: Attrs,
}

impl Node {
    /// Station coordinate from the `pos` attribute (typed or flattened text).
    pub fn pos(&self) -> Option<GeoPoint> {
        self.attrs.get(ATTR_POS).and_then(|v| v.as_point())
    }
}

/// Borrowed view of one edge.
#[derive(Clone, Copy, Debug)]
pub struct Edge<'g> {
    pub key:   &'g EdgeKey,
    pub attrs: &'g Attrs,
}

impl<'g> Edge<'g> {
    pub fn source(&self) -> &'g str {
        self.key.first()
    }

    pub fn target(&self) -> &'g str {
        self.key.second()
    }

    /// Edge length in kilometres, if the `weight` attribute is present and
    /// numeric (text weights are parsed back).
    pub fn weight(&self) -> Option<f64> {
        self.attrs.get(ATTR_WEIGHT).and_then(|v| v.as_f64())
    }
}

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// Undirected, simple, attributed station graph.
///
/// Connectivity is neither required nor checked.
#[derive(Clone, Debug, Default)]
pub struct TransitGraph {
    nodes:      Vec<Node>,
    node_index: HashMap<String, usize>,
    edges:      BTreeMap<EdgeKey, Attrs>,
}

impl TransitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `name` as a node if absent and return its attribute map.
    ///
    /// Idempotent: an existing node keeps its position and attributes.
    pub fn add_node(&mut self, name: &str) -> &mut Attrs {
        let idx = match self.node_index.get(name) {
            Some(&i) => i,
            None => {
                let i = self.nodes.len();
                self.nodes.push(Node { name: name.to_owned(), attrs: Attrs::new() });
                self.node_index.insert(name.to_owned(), i);
                i
            }
        };
        &mut self.nodes[idx].attrs
    }

    /// Insert or replace the edge between `a` and `b`.
    ///
    /// Both endpoints are added as nodes if absent.  Returns the attributes the
    /// edge had before, if it already existed (last write wins).
    pub fn upsert_edge(&mut self, a: &str, b: &str, attrs: Attrs) -> Option<Attrs> {
        self.add_node(a);
        self.add_node(b);
        self.edges.insert(EdgeKey::new(a, b), attrs)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.node_index.get(name).map(|&i| &self.nodes[i])
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges.contains_key(&EdgeKey::new(a, b))
    }

    pub fn edge(&self, a: &str, b: &str) -> Option<Edge<'_>> {
        self.edges
            .get_key_value(&EdgeKey::new(a, b))
            .map(|(key, attrs)| Edge { key, attrs })
    }

    // ── Enumeration ───────────────────────────────────────────────────────

    /// Nodes in first-insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Edges in `EdgeKey` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.edges.iter().map(|(key, attrs)| Edge { key, attrs })
    }

    /// Names of the stations directly connected to `name`.
    pub fn neighbors<'g>(&'g self, name: &'g str) -> impl Iterator<Item = &'g str> + 'g {
        self.edges.keys().filter_map(move |k| k.other(name))
    }

    pub fn degree(&self, name: &str) -> usize {
        self.neighbors(name).count()
    }
}
