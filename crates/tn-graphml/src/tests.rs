//! Unit tests for tn-graphml.

#[cfg(test)]
mod helpers {
    use tn_core::GeoPoint;
    use tn_network::{Line, StationRegistry, TransitGraph, build_network};

    /// Piccadilly section plus a Central stub through Green Park and an
    /// unconnected station.
    pub fn sample() -> TransitGraph {
        let mut reg = StationRegistry::new();
        reg.register_for("Piccadilly", "Hyde Park Corner", GeoPoint::new(51.5027, -0.1526))
            .register_for("Piccadilly", "Green Park", GeoPoint::new(51.5069, -0.1426))
            .register_for("Piccadilly", "Piccadilly Circus", GeoPoint::new(51.5101, -0.1337))
            .register_for("Central", "Green Park", GeoPoint::new(51.5069, -0.1426))
            .register_for("Central", "St. Paul's", GeoPoint::new(51.5143, -0.0972))
            .register("Aldwych", GeoPoint::new(51.5121, -0.1160));
        let lines = [
            Line::new("Piccadilly", "blue", ["Hyde Park Corner", "Green Park", "Piccadilly Circus"]),
            Line::new("Central", "red", ["Green Park", "St. Paul's"]),
        ];
        build_network(&reg, &lines).unwrap()
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer {
    use tn_network::{AttrValue, Attrs, TransitGraph};

    use crate::to_graphml_string;

    #[test]
    fn declares_keys_and_undirected_graph() {
        let xml = to_graphml_string(&super::helpers::sample()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(r#"<key id="d0" for="node" attr.name="pos" attr.type="string"/>"#), "{xml}");
        assert!(xml.contains(r#"attr.name="weight" attr.type="double""#), "{xml}");
        assert!(xml.contains(r#"<graph edgedefault="undirected">"#));
    }

    #[test]
    fn coordinates_are_flattened_to_text() {
        let xml = to_graphml_string(&super::helpers::sample()).unwrap();
        assert!(xml.contains(r#"<data key="d0">51.5027,-0.1526</data>"#), "{xml}");
    }

    #[test]
    fn special_characters_are_escaped() {
        let mut g = TransitGraph::new();
        g.add_node("Elephant & Castle").insert("note".to_owned(), AttrValue::from("<closed>"));
        let xml = to_graphml_string(&g).unwrap();
        assert!(xml.contains("Elephant &amp; Castle"), "{xml}");
        assert!(xml.contains("&lt;closed&gt;"), "{xml}");
        assert!(!xml.contains("<closed>"));
    }

    #[test]
    fn mixed_types_degrade_to_string() {
        let mut g = TransitGraph::new();
        let mut a = Attrs::new();
        a.insert("zone".to_owned(), AttrValue::Int(1));
        let mut b = Attrs::new();
        b.insert("zone".to_owned(), AttrValue::from("1/2"));
        g.upsert_edge("A", "B", a);
        g.upsert_edge("B", "C", b);
        let xml = to_graphml_string(&g).unwrap();
        assert!(xml.contains(r#"attr.name="zone" attr.type="string""#), "{xml}");
    }

    #[test]
    fn empty_graph_is_valid() {
        let xml = to_graphml_string(&TransitGraph::new()).unwrap();
        let back = crate::from_graphml_str(&xml).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.edge_count(), 0);
    }
}

// ── Round trip ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod round_trip {
    use tempfile::TempDir;

    use tn_network::{ATTR_COLOR, ATTR_LINE, ATTR_POS, AttrValue, Attrs, TransitGraph};

    use crate::{from_graphml_str, read_graphml_file, to_graphml_string, write_graphml_file};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn assert_equivalent(a: &TransitGraph, b: &TransitGraph) {
        let names = |g: &TransitGraph| g.nodes().map(|n| n.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(a), names(b));

        let keys = |g: &TransitGraph| g.edges().map(|e| e.key.clone()).collect::<Vec<_>>();
        assert_eq!(keys(a), keys(b));

        for (ea, eb) in a.edges().zip(b.edges()) {
            let (wa, wb) = (ea.weight().unwrap(), eb.weight().unwrap());
            assert!((wa - wb).abs() <= 1e-9 * wa.abs(), "{}: {wa} vs {wb}", ea.key);
        }
    }

    #[test]
    fn nodes_edges_and_weights_survive() {
        let g = super::helpers::sample();
        let back = from_graphml_str(&to_graphml_string(&g).unwrap()).unwrap();
        assert_eq!(back.node_count(), 5);
        assert_eq!(back.edge_count(), 3);
        assert_equivalent(&g, &back);
    }

    #[test]
    fn weights_are_bit_exact() {
        let g = super::helpers::sample();
        let back = from_graphml_str(&to_graphml_string(&g).unwrap()).unwrap();
        for (ea, eb) in g.edges().zip(back.edges()) {
            assert_eq!(ea.weight(), eb.weight());
        }
    }

    #[test]
    fn position_comes_back_as_text() {
        let g = super::helpers::sample();
        let back = from_graphml_str(&to_graphml_string(&g).unwrap()).unwrap();
        let node = back.node("Green Park").unwrap();
        assert_eq!(node.attrs[ATTR_POS], AttrValue::from("51.5069,-0.1426"));
        assert_eq!(node.pos(), g.node("Green Park").unwrap().pos());
    }

    #[test]
    fn line_and_color_survive() {
        let back = from_graphml_str(&to_graphml_string(&super::helpers::sample()).unwrap()).unwrap();
        let e = back.edge("St. Paul's", "Green Park").unwrap();
        assert_eq!(e.attrs[ATTR_LINE], AttrValue::from("Central"));
        assert_eq!(e.attrs[ATTR_COLOR], AttrValue::from("red"));
    }

    #[test]
    fn unconnected_station_survives() {
        let back = from_graphml_str(&to_graphml_string(&super::helpers::sample()).unwrap()).unwrap();
        assert!(back.contains_node("Aldwych"));
        assert_eq!(back.degree("Aldwych"), 0);
    }

    #[test]
    fn typed_values_survive() {
        let mut g = TransitGraph::new();
        let mut a = Attrs::new();
        a.insert("weight".to_owned(), AttrValue::Float(1.5));
        a.insert("tracks".to_owned(), AttrValue::Int(2));
        a.insert("step_free".to_owned(), AttrValue::Bool(true));
        g.upsert_edge("A", "B", a.clone());
        let back = from_graphml_str(&to_graphml_string(&g).unwrap()).unwrap();
        assert_eq!(back.edge("A", "B").unwrap().attrs, &a);
    }

    #[test]
    fn file_round_trip() {
        let dir = tmp();
        let path = dir.path().join("network.graphml");
        let g = super::helpers::sample();
        write_graphml_file(&g, &path).unwrap();
        assert!(path.exists());
        let back = read_graphml_file(&path).unwrap();
        assert_equivalent(&g, &back);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_graphml_file(std::path::Path::new("/nonexistent/x.graphml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/x.graphml"), "{err}");
    }
}

// ── Reader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reader {
    use tn_network::AttrValue;

    use crate::{GraphMlError, from_graphml_str};

    fn doc(keys: &str, body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
{keys}
<graph edgedefault="undirected">
{body}
</graph>
</graphml>"#
        )
    }

    fn parse_err(xml: &str) -> String {
        match from_graphml_str(xml) {
            Err(GraphMlError::Parse(msg)) => msg,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn string_weight_is_text_but_numeric() {
        let xml = doc(
            r#"<key id="w" for="edge" attr.name="weight" attr.type="string"/>"#,
            r#"<node id="A"/><node id="B"/><edge source="A" target="B"><data key="w">0.8349568061671621</data></edge>"#,
        );
        let g = from_graphml_str(&xml).unwrap();
        let e = g.edge("B", "A").unwrap();
        assert_eq!(e.attrs["weight"], AttrValue::from("0.8349568061671621"));
        assert_eq!(e.weight(), Some(0.8349568061671621));
    }

    #[test]
    fn key_defaults_fill_missing_data() {
        let xml = doc(
            r#"<key id="c" for="edge" attr.name="color" attr.type="string"><default>black</default></key>"#,
            r#"<edge source="A" target="B"/><edge source="B" target="C"><data key="c">red</data></edge>"#,
        );
        let g = from_graphml_str(&xml).unwrap();
        assert_eq!(g.edge("A", "B").unwrap().attrs["color"], AttrValue::from("black"));
        assert_eq!(g.edge("B", "C").unwrap().attrs["color"], AttrValue::from("red"));
    }

    #[test]
    fn edge_endpoints_become_nodes() {
        let xml = doc("", r#"<edge source="A" target="B"/>"#);
        let g = from_graphml_str(&xml).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge("A", "B").unwrap().weight(), None);
    }

    #[test]
    fn key_for_all_applies_to_nodes_and_edges() {
        let xml = doc(
            r#"<key id="n" for="all" attr.name="note" attr.type="string"/>"#,
            r#"<node id="A"><data key="n">x</data></node><edge source="A" target="B"><data key="n">y</data></edge>"#,
        );
        let g = from_graphml_str(&xml).unwrap();
        assert_eq!(g.node("A").unwrap().attrs["note"], AttrValue::from("x"));
        assert_eq!(g.edge("A", "B").unwrap().attrs["note"], AttrValue::from("y"));
    }

    #[test]
    fn graph_level_data_is_ignored() {
        let xml = doc(
            r#"<key id="g" for="graph" attr.name="name" attr.type="string"/>"#,
            r#"<data key="g">London</data><node id="A"/>"#,
        );
        assert_eq!(from_graphml_str(&xml).unwrap().node_count(), 1);
    }

    #[test]
    fn escaped_names_are_unescaped() {
        let xml = doc("", r#"<node id="St. Paul&apos;s"/><node id="Elephant &amp; Castle"/>"#);
        let g = from_graphml_str(&xml).unwrap();
        assert!(g.contains_node("St. Paul's"));
        assert!(g.contains_node("Elephant & Castle"));
    }

    #[test]
    fn malformed_xml() {
        parse_err("<graphml><graph><node id=\"A\"></graph></graphml>");
        parse_err("this is not xml");
        parse_err("");
    }

    #[test]
    fn truncated_document() {
        let xml = doc("", r#"<node id="A"/>"#);
        let cut = &xml[..xml.len() - "</graph>\n</graphml>".len()];
        parse_err(cut);
    }

    #[test]
    fn bad_double_is_rejected() {
        let xml = doc(
            r#"<key id="w" for="edge" attr.name="weight" attr.type="double"/>"#,
            r#"<edge source="A" target="B"><data key="w">far</data></edge>"#,
        );
        assert!(parse_err(&xml).contains("not a double"));
    }

    #[test]
    fn undeclared_key_is_rejected() {
        let xml = doc("", r#"<node id="A"><data key="d9">x</data></node>"#);
        assert!(parse_err(&xml).contains("undeclared key"));
    }

    #[test]
    fn key_domain_is_enforced() {
        let xml = doc(
            r#"<key id="p" for="node" attr.name="pos" attr.type="string"/>"#,
            r#"<edge source="A" target="B"><data key="p">1,2</data></edge>"#,
        );
        parse_err(&xml);
    }

    #[test]
    fn parallel_edge_is_rejected() {
        let xml = doc(
            r#"<key id="w" for="edge" attr.name="weight" attr.type="double"/>"#,
            r#"<edge source="A" target="B"><data key="w">1.0</data></edge>
<edge source="B" target="A"><data key="w">3.0</data></edge>"#,
        );
        assert!(parse_err(&xml).contains("parallel edge"));

        let empty = doc("", r#"<edge source="A" target="B"/><edge source="A" target="B"/>"#);
        assert!(parse_err(&empty).contains("parallel edge"));
    }

    #[test]
    fn self_loop_is_rejected() {
        let xml = doc(
            r#"<key id="w" for="edge" attr.name="weight" attr.type="double"/>"#,
            r#"<edge source="A" target="A"><data key="w">5.0</data></edge>"#,
        );
        assert!(parse_err(&xml).contains("self-loop"));
        assert!(parse_err(&doc("", r#"<edge source="B" target="B"/>"#)).contains("self-loop"));
    }

    #[test]
    fn directed_graph_is_rejected() {
        let xml = r#"<graphml><graph edgedefault="directed"><node id="A"/></graph></graphml>"#;
        assert!(parse_err(xml).contains("directed"));
    }

    #[test]
    fn unsupported_shapes_are_rejected() {
        parse_err(r#"<graphml><graph/><graph/></graphml>"#);
        parse_err(r#"<graphml><graph><hyperedge/></graph></graphml>"#);
        parse_err(r#"<graphml><graph><node/></graph></graphml>"#);
        parse_err(r#"<graphml><graph><edge source="A"/></graph></graphml>"#);
        parse_err(r#"<graphml><node id="A"/></graphml>"#);
        parse_err(r#"<graphml></graphml>"#);
    }
}
