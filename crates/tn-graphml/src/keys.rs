//! GraphML `<key>` model: which element kind an attribute belongs to and how
//! its text is typed.

use tn_network::AttrValue;

use crate::{GraphMlError, GraphMlResult};

/// The `for="..."` domain of a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Domain {
    Node,
    Edge,
    Graph,
    All,
}

impl Domain {
    pub fn parse(s: &str) -> GraphMlResult<Self> {
        match s {
            "node" => Ok(Domain::Node),
            "edge" => Ok(Domain::Edge),
            "graph" => Ok(Domain::Graph),
            "all" => Ok(Domain::All),
            other => Err(GraphMlError::Parse(format!("unsupported key domain {other:?}"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Node => "node",
            Domain::Edge => "edge",
            Domain::Graph => "graph",
            Domain::All => "all",
        }
    }

    /// Whether a key declared for `self` applies to elements of `kind`.
    pub fn covers(self, kind: Domain) -> bool {
        self == Domain::All || self == kind
    }
}

/// The `attr.type="..."` of a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttrType {
    String,
    Double,
    Long,
    Boolean,
}

impl AttrType {
    /// Parse an `attr.type`.  `float` and `int` are read as their wider forms.
    pub fn parse(s: &str) -> GraphMlResult<Self> {
        match s {
            "string" => Ok(AttrType::String),
            "double" | "float" => Ok(AttrType::Double),
            "long" | "int" => Ok(AttrType::Long),
            "boolean" => Ok(AttrType::Boolean),
            other => Err(GraphMlError::Parse(format!("unsupported attr.type {other:?}"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttrType::String => "string",
            AttrType::Double => "double",
            AttrType::Long => "long",
            AttrType::Boolean => "boolean",
        }
    }

    /// The narrowest type that can hold `value`.  Points have no GraphML
    /// type and are declared as strings.
    pub fn of(value: &AttrValue) -> Self {
        match value {
            AttrValue::Text(_) | AttrValue::Point(_) => AttrType::String,
            AttrValue::Float(_) => AttrType::Double,
            AttrValue::Int(_) => AttrType::Long,
            AttrValue::Bool(_) => AttrType::Boolean,
        }
    }

    /// Convert element text to a typed value.
    pub fn read(self, text: &str) -> Result<AttrValue, String> {
        match self {
            AttrType::String => Ok(AttrValue::Text(text.to_owned())),
            AttrType::Double => text
                .trim()
                .parse::<f64>()
                .map(AttrValue::Float)
                .map_err(|_| format!("{text:?} is not a double")),
            AttrType::Long => text
                .trim()
                .parse::<i64>()
                .map(AttrValue::Int)
                .map_err(|_| format!("{text:?} is not a long")),
            AttrType::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(AttrValue::Bool(true)),
                "false" | "0" => Ok(AttrValue::Bool(false)),
                _ => Err(format!("{text:?} is not a boolean")),
            },
        }
    }
}
