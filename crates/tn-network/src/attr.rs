//! Node and edge attribute values.
//!
//! Attributes are an ordered name → value map so that a graph reloaded from
//! GraphML can carry whatever the file declared, not just the fields the
//! builder writes.  `Point` is the only composite value; it must be flattened
//! to `"lat,lon"` text by any serializer, and [`AttrValue::as_point`] parses
//! that text back.

use std::collections::BTreeMap;
use std::fmt;

use tn_core::GeoPoint;

/// Node attribute: station coordinate.
pub const ATTR_POS: &str = "pos";
/// Edge attribute: segment length in kilometres.
pub const ATTR_WEIGHT: &str = "weight";
/// Edge attribute: display colour of the line that last declared the segment.
pub const ATTR_COLOR: &str = "color";
/// Edge attribute: name of the line that last declared the segment.
pub const ATTR_LINE: &str = "line";

/// Attribute map attached to every node and edge.
pub type Attrs = BTreeMap<String, AttrValue>;

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Text(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    Point(GeoPoint),
}

impl AttrValue {
    /// Numeric view of the value.  `Text` is parsed back, since numbers
    /// commonly survive a file round trip only as strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Text(s) => s.trim().parse().ok(),
            AttrValue::Bool(_) | AttrValue::Point(_) => None,
        }
    }

    /// Coordinate view of the value, parsing flattened `"lat,lon"` text.
    pub fn as_point(&self) -> Option<GeoPoint> {
        match self {
            AttrValue::Point(p) => Some(*p),
            AttrValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Text form of the value.  `Point` renders as `"lat,lon"`; floats use the
/// shortest representation that parses back to the same `f64`.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Point(p) => write!(f, "{p}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<GeoPoint> for AttrValue {
    fn from(p: GeoPoint) -> Self {
        AttrValue::Point(p)
    }
}
