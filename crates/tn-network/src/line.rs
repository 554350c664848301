//! Line (route) definitions.

/// A named line: stations in travel order plus a display colour.
///
/// Consecutive stations define the line's segments.  The colour is cosmetic;
/// it is copied onto edges for renderers and never affects weights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub name:     String,
    pub color:    String,
    pub stations: Vec<String>,
}

impl Line {
    pub fn new<S: Into<String>>(
        name:     impl Into<String>,
        color:    impl Into<String>,
        stations: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name:     name.into(),
            color:    color.into(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    /// Consecutive station pairs, in travel order.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.stations
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str()))
    }
}
