use chrono::Duration;
use mosaic_core::matching::{DriverCandidate, LoyaltyTier, OrderInfo, VehicleType};
use mosaic_core::test_helpers::{driver_at, order_at, reference_time, CASABLANCA_CENTER};
use mosaic_core::Coordinates;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TIERS: [LoyaltyTier; 5] = [
    LoyaltyTier::Bronze,
    LoyaltyTier::Silver,
    LoyaltyTier::Gold,
    LoyaltyTier::Platinum,
    LoyaltyTier::Diamond,
];

const CUISINES: [&str; 4] = ["moroccan", "pizza", "sushi", "burgers"];

/// Seeded RNG so every test run sees the same city.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A point within roughly `spread_deg` degrees of central Casablanca.
pub fn point_near_center(rng: &mut StdRng, spread_deg: f64) -> Coordinates {
    Coordinates::new(
        CASABLANCA_CENTER.lat + rng.gen_range(-spread_deg..=spread_deg),
        CASABLANCA_CENTER.lng + rng.gen_range(-spread_deg..=spread_deg),
    )
}

pub fn random_driver(rng: &mut StdRng, id: usize, spread_deg: f64) -> DriverCandidate {
    let mut driver = driver_at(&format!("driver-{id}"), point_near_center(rng, spread_deg));
    driver.rating = rng.gen_range(1.0..=5.0);
    driver.capacity = rng.gen_range(1..=4);
    driver.active_deliveries = rng.gen_range(0..=driver.capacity);
    driver.tier = TIERS[rng.gen_range(0..TIERS.len())];
    driver.acceptance_rate = rng.gen_range(0.0..=100.0);
    driver.vehicle_type = if rng.gen_bool(0.7) {
        VehicleType::Motorcycle
    } else {
        VehicleType::Bicycle
    };
    driver.in_medina = rng.gen_bool(0.2);
    driver.specializations = vec![CUISINES[rng.gen_range(0..CUISINES.len())].to_string()];
    driver
}

pub fn random_order(rng: &mut StdRng, id: usize, spread_deg: f64) -> OrderInfo {
    let mut order = order_at(&format!("order-{id}"), point_near_center(rng, spread_deg));
    order.dropoff = point_near_center(rng, spread_deg);
    order.value = rng.gen_range(3_000..=80_000);
    order.cuisine = CUISINES[rng.gen_range(0..CUISINES.len())].to_string();
    order.priority = rng.gen_range(0..=10);
    order.max_wait_minutes = rng.gen_range(15..=60);
    order.created_at = reference_time() - Duration::minutes(rng.gen_range(0..=45));
    order
}

pub fn random_fleet(rng: &mut StdRng, count: usize, spread_deg: f64) -> Vec<DriverCandidate> {
    (0..count).map(|i| random_driver(rng, i, spread_deg)).collect()
}

pub fn random_orders(rng: &mut StdRng, count: usize, spread_deg: f64) -> Vec<OrderInfo> {
    (0..count).map(|i| random_order(rng, i, spread_deg)).collect()
}
