//! Surge pricing from the ratio of active orders to available drivers.
//!
//! | Demand ratio | Multiplier |
//! |--------------|------------|
//! | > 3.0 | 3.0 |
//! | > 2.0 | 2.0 |
//! | > 1.5 | 1.5 |
//! | > 0.8 | 1.2 |
//! | otherwise | 1.0 |
//!
//! With no available drivers the multiplier is 3.0 when there is any demand
//! and 1.0 otherwise.

use log::debug;
use serde::{Deserialize, Serialize};

/// Highest multiplier the platform applies.
pub const MAX_SURGE_MULTIPLIER: f64 = 3.0;

/// Baseline multiplier.
pub const BASE_SURGE_MULTIPLIER: f64 = 1.0;

/// `(ratio strictly above, multiplier, reason)`, highest first.
const SURGE_TIERS: [(f64, f64, &str); 4] = [
    (3.0, 3.0, "extreme demand"),
    (2.0, 2.0, "very high demand"),
    (1.5, 1.5, "high demand"),
    (0.8, 1.2, "moderate demand"),
];

/// Priced outcome for one city snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgePricingResult {
    pub city: String,
    /// Active orders per available driver. With no drivers this is the raw
    /// active order count.
    pub demand_ratio: f64,
    pub multiplier: f64,
    /// Base price in minor currency units.
    pub base_price: i64,
    /// `round(base_price × multiplier)` in minor currency units.
    pub surge_price: i64,
    pub reason: String,
}

fn multiplier_for_ratio(ratio: f64) -> (f64, &'static str) {
    SURGE_TIERS
        .iter()
        .find(|(threshold, _, _)| ratio > *threshold)
        .map(|(_, multiplier, reason)| (*multiplier, *reason))
        .unwrap_or((BASE_SURGE_MULTIPLIER, "normal demand"))
}

/// Price `base_price` for the current demand/supply balance in `city`.
pub fn surge_pricing(
    active_orders: u32,
    available_drivers: u32,
    base_price: i64,
    city: &str,
) -> SurgePricingResult {
    let (demand_ratio, multiplier, reason) = if available_drivers == 0 {
        if active_orders > 0 {
            (active_orders as f64, MAX_SURGE_MULTIPLIER, "no drivers available")
        } else {
            (0.0, BASE_SURGE_MULTIPLIER, "no demand")
        }
    } else {
        let ratio = active_orders as f64 / available_drivers as f64;
        let (multiplier, reason) = multiplier_for_ratio(ratio);
        (ratio, multiplier, reason)
    };

    let surge_price = (base_price as f64 * multiplier).round() as i64;
    debug!(
        "surge in {city}: {active_orders} orders / {available_drivers} drivers -> x{multiplier} ({reason})"
    );

    SurgePricingResult {
        city: city.to_string(),
        demand_ratio,
        multiplier,
        base_price,
        surge_price,
        reason: reason.to_string(),
    }
}
