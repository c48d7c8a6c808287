//! Spatial operations: great-circle distance and bearing between coordinates.
//!
//! This module provides:
//!
//! - **Coordinates**: immutable latitude/longitude value type (degrees)
//! - **Distance**: haversine distance in kilometres on a 6371 km sphere
//! - **Bearing**: initial compass bearing in degrees, `[0, 360)`
//! - **Centroid**: coordinate-wise mean of a set of points
//!
//! No datum conversion is performed. NaN inputs propagate to NaN outputs.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by every distance calculation (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        distance_km(*self, *other)
    }
}

/// Great-circle distance between two coordinates using the haversine formula.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Initial bearing from `from` to `to`, in degrees clockwise from north.
pub fn bearing_degrees(from: Coordinates, to: Coordinates) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let dlon = (to.lng - from.lng).to_radians();
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Coordinate-wise mean of `points`. Returns `None` for an empty slice.
pub fn centroid(points: impl IntoIterator<Item = Coordinates>) -> Option<Coordinates> {
    let (count, lat_sum, lng_sum) = points
        .into_iter()
        .fold((0usize, 0.0, 0.0), |(n, lat, lng), p| (n + 1, lat + p.lat, lng + p.lng));
    if count == 0 {
        return None;
    }
    Some(Coordinates::new(lat_sum / count as f64, lng_sum / count as f64))
}
