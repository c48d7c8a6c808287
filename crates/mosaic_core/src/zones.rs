//! Circular delivery zones.
//!
//! Zones may overlap. A point belongs to the first zone, in input order, whose
//! radius covers it; ops control precedence by ordering the zone list.

use serde::{Deserialize, Serialize};

use crate::matching::DriverCandidate;
use crate::spatial::{distance_km, Coordinates};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryZone {
    pub id: String,
    pub name: String,
    pub center: Coordinates,
    pub radius_km: f64,
}

impl DeliveryZone {
    /// Whether `point` lies within the zone radius (boundary included).
    pub fn contains(&self, point: Coordinates) -> bool {
        distance_km(self.center, point) <= self.radius_km
    }
}

/// First zone covering `point`, if any.
pub fn zone_for(point: Coordinates, zones: &[DeliveryZone]) -> Option<&DeliveryZone> {
    zones.iter().find(|zone| zone.contains(point))
}

/// Number of drivers positioned inside `zone`.
pub fn drivers_in_zone(zone: &DeliveryZone, drivers: &[DriverCandidate]) -> usize {
    drivers
        .iter()
        .filter(|driver| zone.contains(driver.location))
        .count()
}
