//! GraphML reader.
//!
//! Accepts a single undirected `<graph>`.  `<key>` declarations give each
//! `<data>` its attribute name and type; a key's `<default>` fills in
//! elements that omit it.  Edges may name nodes that were never declared;
//! those nodes are added on the fly.  Graph-level `<data>` is ignored.
//!
//! The graph must be simple: self-loops and repeated edges between the same
//! pair of stations (in either direction) are rejected.
//!
//! Everything else that does not fit, from malformed XML to a directed graph,
//! a hyperedge, or an undeclared data key, is a [`GraphMlError::Parse`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::info;

use tn_network::{AttrValue, Attrs, TransitGraph};

use crate::keys::{AttrType, Domain};
use crate::{GraphMlError, GraphMlResult};

// ── Parse state ───────────────────────────────────────────────────────────────

struct KeyDecl {
    domain:  Domain,
    name:    String,
    ty:      AttrType,
    default: Option<AttrValue>,
}

/// Element whose `<data>` children are being collected.
enum Open {
    Key(String),
    Node { id: String, attrs: Attrs },
    Edge { source: String, target: String, attrs: Attrs },
}

/// Text being accumulated for a `<data>` or `<default>` element.
enum Capture {
    Data { key: String, text: String },
    Default { text: String },
}

#[derive(Default)]
struct State {
    keys:    HashMap<String, KeyDecl>,
    graph:   TransitGraph,
    root:    bool,
    graphs:  usize,
    depth:   usize,
    open:    Option<Open>,
    capture: Option<Capture>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read a GraphML document from `input`.
pub fn read_graphml<R: BufRead>(input: R) -> GraphMlResult<TransitGraph> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut st = State::default();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            GraphMlError::Parse(format!("malformed XML at byte {}: {e}", reader.error_position()))
        })?;
        let at = reader.buffer_position();
        let ctx = |msg: String| GraphMlError::Parse(format!("{msg} (near byte {at})"));

        match event {
            Event::Start(e) => {
                st.depth += 1;
                st.start(&e, false).map_err(ctx)?;
            }
            Event::Empty(e) => {
                st.start(&e, true).map_err(ctx)?;
            }
            Event::End(e) => {
                st.depth = st.depth.saturating_sub(1);
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                st.end(&name).map_err(ctx)?;
            }
            Event::Text(t) => {
                if let Some(text) = st.capture_text() {
                    let s = t.unescape().map_err(|e| ctx(format!("bad text: {e}")))?;
                    text.push_str(&s);
                }
            }
            Event::CData(c) => {
                if let Some(text) = st.capture_text() {
                    let s = std::str::from_utf8(&c).map_err(|e| ctx(format!("bad CDATA: {e}")))?;
                    text.push_str(s);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !st.root {
        return Err(GraphMlError::Parse("missing <graphml> root element".to_owned()));
    }
    if st.depth != 0 {
        return Err(GraphMlError::Parse("document ends inside an open element".to_owned()));
    }
    if st.graphs == 0 {
        return Err(GraphMlError::Parse("no <graph> element".to_owned()));
    }
    Ok(st.graph)
}

/// Read a GraphML document held in memory.
pub fn from_graphml_str(s: &str) -> GraphMlResult<TransitGraph> {
    read_graphml(s.as_bytes())
}

/// Read a GraphML file from `path`.
pub fn read_graphml_file(path: &Path) -> GraphMlResult<TransitGraph> {
    let file = File::open(path).map_err(|source| GraphMlError::File {
        path: path.to_owned(),
        source,
    })?;
    let graph = read_graphml(BufReader::new(file))?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded from GraphML"
    );
    Ok(graph)
}

// ── State machine ─────────────────────────────────────────────────────────────

impl State {
    fn start(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<(), String> {
        match e.local_name().as_ref() {
            b"graphml" => self.root = true,
            b"key" => {
                let id = required(e, "id")?;
                let decl = KeyDecl {
                    domain:  Domain::parse(&optional(e, "for")?.unwrap_or_else(|| "all".to_owned()))
                        .map_err(|e| e.to_string())?,
                    name:    required(e, "attr.name")?,
                    ty:      AttrType::parse(&optional(e, "attr.type")?.unwrap_or_else(|| "string".to_owned()))
                        .map_err(|e| e.to_string())?,
                    default: None,
                };
                self.keys.insert(id.clone(), decl);
                if !empty {
                    self.open = Some(Open::Key(id));
                }
            }
            b"default" => {
                if matches!(self.open, Some(Open::Key(_))) && !empty {
                    self.capture = Some(Capture::Default { text: String::new() });
                }
            }
            b"graph" => {
                if self.graphs > 0 {
                    return Err("more than one <graph> element".to_owned());
                }
                if optional(e, "edgedefault")?.as_deref() == Some("directed") {
                    return Err("directed graphs are not supported".to_owned());
                }
                self.graphs += 1;
            }
            b"node" => {
                let open = Open::Node { id: required(e, "id")?, attrs: Attrs::new() };
                self.open_element(open, empty)?;
            }
            b"edge" => {
                let open = Open::Edge {
                    source: required(e, "source")?,
                    target: required(e, "target")?,
                    attrs:  Attrs::new(),
                };
                self.open_element(open, empty)?;
            }
            b"data" => {
                let key = required(e, "key")?;
                if empty {
                    self.store_data(&key, "")?;
                } else {
                    self.capture = Some(Capture::Data { key, text: String::new() });
                }
            }
            b"hyperedge" => return Err("hyperedges are not supported".to_owned()),
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), String> {
        match name {
            "data" => {
                if let Some(Capture::Data { key, text }) = self.capture.take() {
                    self.store_data(&key, &text)?;
                }
            }
            "default" => {
                if let (Some(Capture::Default { text }), Some(Open::Key(id))) = (self.capture.take(), &self.open) {
                    let decl = self.keys.get_mut(id).ok_or_else(|| format!("unknown key {id:?}"))?;
                    let value = decl.ty.read(&text).map_err(|msg| format!("default of key {id:?}: {msg}"))?;
                    decl.default = Some(value);
                }
            }
            "key" => self.open = None,
            "node" | "edge" => {
                if let Some(open) = self.open.take() {
                    self.finish(open)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn open_element(&mut self, open: Open, empty: bool) -> Result<(), String> {
        if self.graphs == 0 {
            return Err("node or edge outside <graph>".to_owned());
        }
        if empty {
            self.finish(open)?;
        } else {
            self.open = Some(open);
        }
        Ok(())
    }

    fn capture_text(&mut self) -> Option<&mut String> {
        match &mut self.capture {
            Some(Capture::Data { text, .. }) | Some(Capture::Default { text }) => Some(text),
            None => None,
        }
    }

    /// Attach one `<data>` value to the element being read.
    fn store_data(&mut self, key: &str, text: &str) -> Result<(), String> {
        let decl = self.keys.get(key).ok_or_else(|| format!("<data> uses undeclared key {key:?}"))?;
        let (kind, attrs) = match &mut self.open {
            Some(Open::Node { attrs, .. }) => (Domain::Node, attrs),
            Some(Open::Edge { attrs, .. }) => (Domain::Edge, attrs),
            // graph-level data
            _ => return Ok(()),
        };
        if !decl.domain.covers(kind) {
            return Err(format!("key {key:?} is declared for {}, not {}", decl.domain.as_str(), kind.as_str()));
        }
        let value = decl.ty.read(text).map_err(|msg| format!("key {key:?} ({}): {msg}", decl.name))?;
        attrs.insert(decl.name.clone(), value);
        Ok(())
    }

    /// Commit a completed node or edge.  The graph must stay simple: a
    /// self-loop or a second edge for the same station pair is rejected.
    fn finish(&mut self, open: Open) -> Result<(), String> {
        match open {
            Open::Node { id, mut attrs } => {
                self.apply_defaults(Domain::Node, &mut attrs);
                self.graph.add_node(&id).extend(attrs);
            }
            Open::Edge { source, target, mut attrs } => {
                if source == target {
                    return Err(format!("self-loop edge on {source:?}"));
                }
                if self.graph.contains_edge(&source, &target) {
                    return Err(format!("parallel edge {source:?}–{target:?}"));
                }
                self.apply_defaults(Domain::Edge, &mut attrs);
                self.graph.upsert_edge(&source, &target, attrs);
            }
            Open::Key(_) => {}
        }
        Ok(())
    }

    fn apply_defaults(&self, kind: Domain, attrs: &mut Attrs) {
        for decl in self.keys.values().filter(|d| d.domain.covers(kind)) {
            if let Some(default) = &decl.default {
                attrs.entry(decl.name.clone()).or_insert_with(|| default.clone());
            }
        }
    }
}

// ── Attribute helpers ─────────────────────────────────────────────────────────

fn optional(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, String> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| format!("bad attribute: {err}"))?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(|err| format!("bad value for {name:?}: {err}"))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn required(e: &BytesStart<'_>, name: &str) -> Result<String, String> {
    optional(e, name)?.ok_or_else(|| {
        format!("<{}> without {name:?} attribute", String::from_utf8_lossy(e.local_name().as_ref()))
    })
}
