//! Test helpers for common fixtures.
//!
//! Every fixture sits in central Casablanca on a Monday late morning (midday
//! period) so tests share the same geography and clock.

use chrono::{NaiveDate, NaiveDateTime};

use crate::matching::{DriverCandidate, LoyaltyTier, OrderInfo, VehicleType};
use crate::spatial::Coordinates;

/// Central Casablanca.
pub const CASABLANCA_CENTER: Coordinates = Coordinates::new(33.5731, -7.5898);

/// Monday 2024-03-11 11:00, inside the midday period.
///
/// # Panics
///
/// Never in practice: the date literal is valid.
pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 11)
        .and_then(|d| d.and_hms_opt(11, 0, 0))
        .expect("reference time should be a valid timestamp")
}

/// Idle, well-rated silver motorcycle driver specializing in moroccan cuisine.
pub fn driver_at(id: &str, location: Coordinates) -> DriverCandidate {
    DriverCandidate {
        id: id.to_string(),
        location,
        rating: 4.5,
        active_deliveries: 0,
        capacity: 3,
        tier: LoyaltyTier::Silver,
        acceptance_rate: 85.0,
        vehicle_type: VehicleType::Motorcycle,
        in_medina: false,
        last_delivery_at: None,
        specializations: vec!["moroccan".to_string()],
    }
}

/// Moroccan order created at [`reference_time`], dropoff ~2.2 km north of pickup.
pub fn order_at(id: &str, pickup: Coordinates) -> OrderInfo {
    OrderInfo {
        id: id.to_string(),
        pickup,
        dropoff: Coordinates::new(pickup.lat + 0.02, pickup.lng),
        value: 15_000,
        cuisine: "moroccan".to_string(),
        fragile: false,
        max_wait_minutes: 30,
        created_at: reference_time(),
        priority: 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::{classify_period, TimePeriod};

    #[test]
    fn reference_time_is_midday() {
        assert_eq!(classify_period(&reference_time()), TimePeriod::Midday);
    }

    #[test]
    fn fixtures_are_eligible_pairs() {
        let driver = driver_at("d", CASABLANCA_CENTER);
        let order = order_at("o", CASABLANCA_CENTER);
        assert!(driver.has_capacity());
        assert!(driver.specializes_in(&order.cuisine));
    }
}
