use serde::{Deserialize, Serialize};

/// Mean Earth radius used for haversine distances (meters).
const EARTH_RADIUS: f64 = 6378137.0;

/// Represents a geographical coordinate with latitude and longitude
///
/// `LatLng` is the raw pair; it carries no information about which geodetic
/// reference system it was measured in. Use [`Wgs84`] and [`Gcj02`] at API
/// boundaries so the two spaces cannot be intermixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat >= -90.0
            && self.lat <= 90.0
            && self.lng >= -180.0
            && self.lng <= 180.0
    }

    /// Calculates the distance to another LatLng using the Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A position in the WGS84 reference system.
///
/// This is the *external* representation: the contract with the embedding
/// caller and with search results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wgs84(pub LatLng);

impl Wgs84 {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self(LatLng::new(lat, lng))
    }

    pub fn lat(&self) -> f64 {
        self.0.lat
    }

    pub fn lng(&self) -> f64 {
        self.0.lng
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }
}

/// A position in the GCJ02 reference system.
///
/// This is the *display* representation: what the map provider consumes for
/// correct rendering in mainland China. It is offset from WGS84 by a
/// non-linear, position-dependent transform (see [`crate::core::transform`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gcj02(pub LatLng);

impl Gcj02 {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self(LatLng::new(lat, lng))
    }

    pub fn lat(&self) -> f64 {
        self.0.lat
    }

    pub fn lng(&self) -> f64 {
        self.0.lng
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }
}
