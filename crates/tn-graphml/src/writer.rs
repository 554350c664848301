//! GraphML writer.
//!
//! Output layout: one `<key>` per (domain, attribute name) in first-seen
//! order with ids `d0, d1, …`; then `<graph edgedefault="undirected">` with
//! nodes in graph order and edges in `EdgeKey` order.  Attribute values are
//! written as text; `Point` coordinates are flattened to `"lat,lon"` and
//! floats use their shortest round-trip form, so weights reload bit-exact.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use tn_network::{AttrValue, Attrs, TransitGraph};

use crate::keys::{AttrType, Domain};
use crate::{GraphMlError, GraphMlResult};

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

// ── Key table ─────────────────────────────────────────────────────────────────

struct KeySpec {
    id:     String,
    domain: Domain,
    name:   String,
    ty:     AttrType,
}

/// Declared keys for one document.  Small enough for linear lookup.
struct KeyTable {
    keys: Vec<KeySpec>,
}

impl KeyTable {
    fn collect(graph: &TransitGraph) -> Self {
        let mut keys: Vec<KeySpec> = Vec::new();
        let mut observe = |domain: Domain, attrs: &Attrs| {
            for (name, value) in attrs {
                let ty = AttrType::of(value);
                match keys.iter_mut().find(|k| k.domain == domain && &k.name == name) {
                    // Mixed types under one name degrade to text.
                    Some(k) if k.ty != ty => k.ty = AttrType::String,
                    Some(_) => {}
                    None => keys.push(KeySpec {
                        id: format!("d{}", keys.len()),
                        domain,
                        name: name.clone(),
                        ty,
                    }),
                }
            }
        };

        for node in graph.nodes() {
            observe(Domain::Node, &node.attrs);
        }
        for edge in graph.edges() {
            observe(Domain::Edge, edge.attrs);
        }
        Self { keys }
    }

    fn get(&self, domain: Domain, name: &str) -> Option<&KeySpec> {
        self.keys.iter().find(|k| k.domain == domain && k.name == name)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Write `graph` as a GraphML document to `out`.
pub fn write_graphml<W: Write>(graph: &TransitGraph, out: W) -> GraphMlResult<()> {
    let keys = KeyTable::collect(graph);
    let mut w = Writer::new_with_indent(out, b' ', 2);

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("graphml");
    root.push_attribute(("xmlns", GRAPHML_NS));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    w.write_event(Event::Start(root))?;

    for key in &keys.keys {
        let mut el = BytesStart::new("key");
        el.push_attribute(("id", key.id.as_str()));
        el.push_attribute(("for", key.domain.as_str()));
        el.push_attribute(("attr.name", key.name.as_str()));
        el.push_attribute(("attr.type", key.ty.as_str()));
        w.write_event(Event::Empty(el))?;
    }

    let mut g = BytesStart::new("graph");
    g.push_attribute(("edgedefault", "undirected"));
    w.write_event(Event::Start(g))?;

    for node in graph.nodes() {
        let mut el = BytesStart::new("node");
        el.push_attribute(("id", node.name.as_str()));
        write_element(&mut w, el, Domain::Node, &node.attrs, &keys)?;
    }

    for edge in graph.edges() {
        let mut el = BytesStart::new("edge");
        el.push_attribute(("source", edge.source()));
        el.push_attribute(("target", edge.target()));
        write_element(&mut w, el, Domain::Edge, edge.attrs, &keys)?;
    }

    w.write_event(Event::End(BytesEnd::new("graph")))?;
    w.write_event(Event::End(BytesEnd::new("graphml")))?;
    w.into_inner().flush()?;
    Ok(())
}

/// Render `graph` as a GraphML string.
pub fn to_graphml_string(graph: &TransitGraph) -> GraphMlResult<String> {
    let mut buf = Vec::new();
    write_graphml(graph, &mut buf)?;
    String::from_utf8(buf).map_err(|e| GraphMlError::Parse(format!("writer produced invalid UTF-8: {e}")))
}

/// Write `graph` to a GraphML file at `path`, replacing any existing file.
pub fn write_graphml_file(graph: &TransitGraph, path: &Path) -> GraphMlResult<()> {
    let file = File::create(path).map_err(|source| GraphMlError::File {
        path: path.to_owned(),
        source,
    })?;
    write_graphml(graph, BufWriter::new(file))?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph written as GraphML"
    );
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_element<W: Write>(
    w:      &mut Writer<W>,
    start:  BytesStart<'_>,
    domain: Domain,
    attrs:  &Attrs,
    keys:   &KeyTable,
) -> GraphMlResult<()> {
    if attrs.is_empty() {
        w.write_event(Event::Empty(start))?;
        return Ok(());
    }

    let end = start.to_end().into_owned();
    w.write_event(Event::Start(start))?;
    for (name, value) in attrs {
        let Some(key) = keys.get(domain, name) else {
            return Err(GraphMlError::Parse(format!("no key declared for {} attribute {name:?}", domain.as_str())));
        };
        let mut data = BytesStart::new("data");
        data.push_attribute(("key", key.id.as_str()));
        w.write_event(Event::Start(data))?;
        w.write_event(Event::Text(BytesText::new(&text_of(value))))?;
        w.write_event(Event::End(BytesEnd::new("data")))?;
    }
    w.write_event(Event::End(end))?;
    Ok(())
}

/// Leaf text of a value.  Every variant, `Point` included, has a text form
/// whose parse under its declared key type gives the value back.
fn text_of(value: &AttrValue) -> String {
    value.to_string()
}
