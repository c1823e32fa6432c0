//! A common latitude/longitude value object. Different map systems carry
//! location data in different structures; this one brings them to a common
//! denominator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Radius of Earth, in meters.
pub const EARTH_RADIUS: f64 = 6_372_795.0;

const MIN_LATITUDE: f64 = -90.0;
const MAX_LATITUDE: f64 = 90.0;
const MIN_LONGITUDE: f64 = -180.0;
const MAX_LONGITUDE: f64 = 180.0;

/// The coordinate value used when no correct data is known.
const WRONG_LOCATION: f64 = 512.0;

/// The default separator between latitude and longitude in text form. Keep
/// it in sync with the external data format.
const LOCATION_SEPARATOR: &str = ",";

/// A geographic point in WGS84 degrees, with an optional title.
///
/// A component outside its valid range marks the value as invalid. Parsing
/// never fails; it yields an invalid value instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    lat: f64,
    lon: f64,
}

impl Default for LatLon {
    fn default() -> Self {
        Self {
            title: None,
            lat: WRONG_LOCATION,
            lon: WRONG_LOCATION,
        }
    }
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            title: None,
            lat,
            lon,
        }
    }

    /// Clears the coordinate data.
    pub fn clear(&mut self) {
        self.lat = WRONG_LOCATION;
        self.lon = WRONG_LOCATION;
    }

    /// The latitude, in degrees.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// The longitude, in degrees.
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    /// True when both components are in range.
    pub fn is_valid(&self) -> bool {
        self.has_lat() && self.has_lon()
    }

    /// True when this object has no valid coordinate data.
    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    pub fn has_lat(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
    }

    pub fn has_lon(&self) -> bool {
        (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.lon)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Obtains coordinate data and title from another object.
    pub fn obtain(&mut self, origin: &LatLon) {
        self.lat = origin.lat;
        self.lon = origin.lon;
        self.title = origin.title.clone();
    }

    /// Reads a location from `"lat,lon"` text. The result may carry invalid
    /// data when the input is malformed.
    pub fn parse(value: &str) -> LatLon {
        Self::parse_with(value, LOCATION_SEPARATOR)
    }

    /// Reads a location from text with a custom separator.
    pub fn parse_with(value: &str, separator: &str) -> LatLon {
        let mut out = LatLon::default();
        if value.trim().is_empty() || !value.contains(separator) {
            return out;
        }
        let Some((lat, lon)) = value.split_once(separator) else {
            return out;
        };
        let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) else {
            return out;
        };
        out.lat = lat;
        out.lon = lon;
        out
    }

    /// The minimum distance between two points over the great circle, in
    /// meters. Returns 0.0 when either point is invalid.
    pub fn distance(a: &LatLon, b: &LatLon) -> f64 {
        if !a.is_valid() || !b.is_valid() {
            return 0.0;
        }

        let lat1 = a.lat.to_radians();
        let lon1 = a.lon.to_radians();
        let lat2 = b.lat.to_radians();
        let lon2 = b.lon.to_radians();

        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_lat2, cos_lat2) = lat2.sin_cos();

        let delta = lon2 - lon1;
        let (sin_delta, cos_delta) = delta.sin_cos();

        let tmp = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta;
        let y = ((cos_lat2 * sin_delta).powi(2) + tmp.powi(2)).sqrt();
        let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta;
        y.atan2(x) * EARTH_RADIUS
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}{}{:.7}", self.lat, LOCATION_SEPARATOR, self.lon)
    }
}
