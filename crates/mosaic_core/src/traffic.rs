//! Travel-time estimation from great-circle distance and city speed profiles.
//!
//! Effective speed is the city's average speed times a stack of independent
//! multiplicative factors:
//!
//! 1. Medina factor, when the trip starts inside a dense-navigation zone
//!    and the city has one
//! 2. Peak factor during morning and evening rush
//! 3. 0.5 during the Friday prayer window
//! 4. 0.4 during the Ramadan iftar window
//!
//! The result is floored at walking pace so degenerate profiles never produce
//! infinite or negative ETAs. This is a dispatch heuristic, not road routing.

use serde::{Deserialize, Serialize};

use crate::period::TimePeriod;
use crate::rounding::round2;
use crate::spatial::{distance_km, Coordinates};
use crate::speed::CitySpeedProfile;

/// Lowest effective speed an estimate may use (km/h).
pub const WALKING_SPEED_KMH: f64 = 4.0;

/// Speed multiplier during the Friday prayer window.
pub const FRIDAY_PRAYER_FACTOR: f64 = 0.5;

/// Speed multiplier during the Ramadan iftar window.
pub const RAMADAN_IFTAR_FACTOR: f64 = 0.4;

/// Combined speed multiplier for a city, zone flag and period.
pub fn speed_factor(profile: &CitySpeedProfile, in_dense_zone: bool, period: TimePeriod) -> f64 {
    let zone_factor = if in_dense_zone && profile.has_medina {
        profile.medina_multiplier
    } else {
        1.0
    };
    let period_factor = match period {
        TimePeriod::MorningRush | TimePeriod::EveningRush => profile.peak_multiplier,
        TimePeriod::FridayPrayer => FRIDAY_PRAYER_FACTOR,
        TimePeriod::RamadanIftar => RAMADAN_IFTAR_FACTOR,
        TimePeriod::Midday | TimePeriod::Afternoon | TimePeriod::Night => 1.0,
    };
    zone_factor * period_factor
}

/// Effective travel speed (km/h), floored at `min_speed_kmh`.
pub fn effective_speed_kmh(
    profile: &CitySpeedProfile,
    in_dense_zone: bool,
    period: TimePeriod,
    min_speed_kmh: f64,
) -> f64 {
    (profile.avg_speed_kmh * speed_factor(profile, in_dense_zone, period)).max(min_speed_kmh)
}

/// Estimated minutes to travel from `from` to `to`, rounded to 2 decimals.
pub fn estimate_travel_minutes(
    from: Coordinates,
    to: Coordinates,
    profile: &CitySpeedProfile,
    in_dense_zone: bool,
    period: TimePeriod,
) -> f64 {
    estimate_travel_minutes_floored(from, to, profile, in_dense_zone, period, WALKING_SPEED_KMH)
}

/// Same as [`estimate_travel_minutes`] with a caller-chosen speed floor.
pub fn estimate_travel_minutes_floored(
    from: Coordinates,
    to: Coordinates,
    profile: &CitySpeedProfile,
    in_dense_zone: bool,
    period: TimePeriod,
    min_speed_kmh: f64,
) -> f64 {
    let distance = distance_km(from, to);
    let speed = effective_speed_kmh(profile, in_dense_zone, period, min_speed_kmh);
    round2(distance / speed * 60.0)
}

/// Phase-by-phase delivery estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryEta {
    pub pickup_minutes: f64,
    pub prep_minutes: f64,
    pub delivery_minutes: f64,
    pub total_minutes: f64,
}

/// Driver-to-pickup travel, kitchen prep, then pickup-to-dropoff travel.
pub fn estimate_delivery_eta(
    driver_location: Coordinates,
    pickup: Coordinates,
    dropoff: Coordinates,
    profile: &CitySpeedProfile,
    in_dense_zone: bool,
    prep_minutes: f64,
    period: TimePeriod,
) -> DeliveryEta {
    estimate_delivery_eta_floored(
        driver_location,
        pickup,
        dropoff,
        profile,
        in_dense_zone,
        prep_minutes,
        period,
        WALKING_SPEED_KMH,
    )
}

/// Same as [`estimate_delivery_eta`] with a caller-chosen speed floor for both legs.
#[allow(clippy::too_many_arguments)]
pub fn estimate_delivery_eta_floored(
    driver_location: Coordinates,
    pickup: Coordinates,
    dropoff: Coordinates,
    profile: &CitySpeedProfile,
    in_dense_zone: bool,
    prep_minutes: f64,
    period: TimePeriod,
    min_speed_kmh: f64,
) -> DeliveryEta {
    let pickup_minutes = estimate_travel_minutes_floored(
        driver_location,
        pickup,
        profile,
        in_dense_zone,
        period,
        min_speed_kmh,
    );
    let delivery_minutes = estimate_travel_minutes_floored(
        pickup,
        dropoff,
        profile,
        in_dense_zone,
        period,
        min_speed_kmh,
    );
    DeliveryEta {
        pickup_minutes,
        prep_minutes,
        delivery_minutes,
        total_minutes: round2(pickup_minutes + prep_minutes + delivery_minutes),
    }
}
