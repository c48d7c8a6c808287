use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::spatial::Coordinates;

/// Driver loyalty tier, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl LoyaltyTier {
    pub fn label(self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "bronze",
            LoyaltyTier::Silver => "silver",
            LoyaltyTier::Gold => "gold",
            LoyaltyTier::Platinum => "platinum",
            LoyaltyTier::Diamond => "diamond",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Bicycle,
    Motorcycle,
    Car,
}

/// Snapshot of a driver taken for one matching pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCandidate {
    pub id: String,
    pub location: Coordinates,
    /// Average customer rating, 1–5.
    pub rating: f64,
    pub active_deliveries: u32,
    pub capacity: u32,
    pub tier: LoyaltyTier,
    /// Historical offer acceptance rate, 0–100.
    pub acceptance_rate: f64,
    pub vehicle_type: VehicleType,
    /// Currently inside a dense-navigation zone (medina).
    pub in_medina: bool,
    pub last_delivery_at: Option<NaiveDateTime>,
    /// Cuisine categories the driver specializes in.
    pub specializations: Vec<String>,
}

impl DriverCandidate {
    /// Whether the driver can take one more delivery.
    pub fn has_capacity(&self) -> bool {
        self.active_deliveries < self.capacity
    }

    pub fn specializes_in(&self, cuisine: &str) -> bool {
        self.specializations.iter().any(|s| s == cuisine)
    }
}

/// Snapshot of a pending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub id: String,
    pub pickup: Coordinates,
    pub dropoff: Coordinates,
    /// Estimated order value in minor currency units.
    pub value: i64,
    pub cuisine: String,
    pub fragile: bool,
    pub max_wait_minutes: u32,
    pub created_at: NaiveDateTime,
    /// Caller-supplied base priority, 0–10.
    pub priority: u8,
}

/// A recommended driver for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub driver_id: String,
    pub order_id: String,
    /// Mosaic score, 0–100.
    pub score: f64,
    pub estimated_pickup_minutes: f64,
    pub estimated_delivery_minutes: f64,
    /// Driver to pickup plus pickup to dropoff (km).
    pub total_distance_km: f64,
    /// Operator-facing explanation tags. Not used for scoring.
    pub reasons: Vec<String>,
}
