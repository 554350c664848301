//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` stores latitude/longitude as `f64` decimal degrees.  Station
//! tables are small, so double precision costs nothing and keeps edge weights
//! stable across a GraphML round trip.  No range validation is performed:
//! out-of-range degrees flow straight into the distance math.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Mean Earth radius used by [`GeoPoint::distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// `a` is clamped to `[0, 1]` before `asin(sqrt(a))`: rounding can push it
    /// a hair past 1 for near-antipodal points, which would otherwise yield NaN.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = other.lon.to_radians() - self.lon.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
        EARTH_RADIUS_KM * c
    }
}

/// Free-function form of [`GeoPoint::distance_km`].
#[inline]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    a.distance_km(b)
}

/// Renders `"lat,lon"` with the shortest decimal form that parses back to the
/// same `f64`s.  This is the flattened text form of a coordinate attribute.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for GeoPoint {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = |reason| CoreError::InvalidCoordinate { input: s.to_owned(), reason };

        let (lat, lon) = s.split_once(',').ok_or_else(|| invalid("expected \"lat,lon\""))?;
        let lat = lat.trim().parse::<f64>().map_err(|_| invalid("latitude is not a number"))?;
        let lon = lon.trim().parse::<f64>().map_err(|_| invalid("longitude is not a number"))?;
        Ok(GeoPoint::new(lat, lon))
    }
}
