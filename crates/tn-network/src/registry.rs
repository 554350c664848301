//! Station registry as an explicit, ordered registration log.
//!
//! The same station may be declared more than once, typically an interchange
//! listed in every line's coordinate table.  Declarations are kept in order
//! and folded by [`StationRegistry::resolve`] with **last write wins**: the
//! final coordinate for a name is the one every line sees, no matter which
//! line's table declared it.  A re-declaration with a different coordinate is
//! logged as a warning because the resulting edge weights then depend on
//! declaration order.

use std::collections::HashMap;

use tracing::{debug, warn};

use tn_core::GeoPoint;

/// One coordinate declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub name:   String,
    pub pos:    GeoPoint,
    /// Line whose table declared the coordinate, `None` for a standalone entry.
    pub source: Option<String>,
}

/// Ordered log of station coordinate declarations.
#[derive(Clone, Debug, Default)]
pub struct StationRegistry {
    log: Vec<Registration>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` at `pos` independently of any line.
    pub fn register(&mut self, name: impl Into<String>, pos: GeoPoint) -> &mut Self {
        self.log.push(Registration { name: name.into(), pos, source: None });
        self
    }

    /// Declare `name` at `pos` as part of `line`'s coordinate table.
    pub fn register_for(
        &mut self,
        line: impl Into<String>,
        name: impl Into<String>,
        pos:  GeoPoint,
    ) -> &mut Self {
        self.log.push(Registration { name: name.into(), pos, source: Some(line.into()) });
        self
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Fold the log in declaration order into one coordinate per name.
    ///
    /// Names keep the position of their first declaration; coordinates take
    /// the value of their last.
    pub fn resolve(&self) -> ResolvedStations {
        let mut order: Vec<String> = Vec::new();
        let mut coords: HashMap<String, (GeoPoint, Option<&str>)> = HashMap::new();

        for reg in &self.log {
            let source = reg.source.as_deref();
            match coords.insert(reg.name.clone(), (reg.pos, source)) {
                None => order.push(reg.name.clone()),
                Some((prev, prev_source)) if prev != reg.pos => {
                    warn!(
                        station = %reg.name,
                        previous = %prev,
                        previous_source = prev_source.unwrap_or("-"),
                        current = %reg.pos,
                        current_source = source.unwrap_or("-"),
                        "station re-declared with a different coordinate; last declaration wins"
                    );
                }
                Some(_) => {
                    debug!(station = %reg.name, source = source.unwrap_or("-"), "identical re-declaration");
                }
            }
        }

        let coords = coords.into_iter().map(|(name, (pos, _))| (name, pos)).collect();
        ResolvedStations { order, coords }
    }
}

/// Final coordinate per station name, after last-write-wins resolution.
#[derive(Clone, Debug, Default)]
pub struct ResolvedStations {
    order:  Vec<String>,
    coords: HashMap<String, GeoPoint>,
}

impl ResolvedStations {
    pub fn get(&self, name: &str) -> Option<GeoPoint> {
        self.coords.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.coords.contains_key(name)
    }

    /// Station names in order of first declaration.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// `(name, coordinate)` pairs in order of first declaration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, GeoPoint)> + '_ {
        self.order.iter().map(|n| (n.as_str(), self.coords[n]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
