//! Mosaic score: weighted composite of six driver/order sub-scores.
//!
//! Every sub-score lives on a 0–100 scale:
//!
//! | Sub-score | Formula |
//! |-----------|---------|
//! | proximity | `100 × (1 − pickup_km / max_pickup_km)`, floored at 0 |
//! | rating | `(rating − 1) / 4 × 100` |
//! | load | `100 × (1 − active / capacity)`, floored at 0 |
//! | tier | bronze 0, silver 20, gold 40, platinum 60, diamond 100 |
//! | acceptance | acceptance rate as is |
//! | specialization | 100 when the order's cuisine is a driver specialization |
//!
//! The final score is the weighted sum, clamped to `[0, 100]` and rounded to
//! 2 decimals. Scoring is pure: identical inputs give identical output.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_PICKUP_DISTANCE_KM;
use crate::rounding::round2;
use crate::spatial::distance_km;

use super::types::{DriverCandidate, LoyaltyTier, OrderInfo};
use super::weights::MatchingWeights;

/// Fixed tier bonus lookup.
pub const fn tier_score(tier: LoyaltyTier) -> f64 {
    match tier {
        LoyaltyTier::Bronze => 0.0,
        LoyaltyTier::Silver => 20.0,
        LoyaltyTier::Gold => 40.0,
        LoyaltyTier::Platinum => 60.0,
        LoyaltyTier::Diamond => 100.0,
    }
}

/// Individual sub-scores and the weighted result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub proximity: f64,
    pub rating: f64,
    pub load: f64,
    pub tier: f64,
    pub acceptance: f64,
    pub specialization: f64,
    pub total: f64,
}

fn unit_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Sub-scores for `driver` serving `order`.
pub fn score_breakdown(
    driver: &DriverCandidate,
    order: &OrderInfo,
    weights: &MatchingWeights,
    max_pickup_distance_km: f64,
) -> ScoreBreakdown {
    let pickup_km = distance_km(driver.location, order.pickup);
    let proximity = unit_score(100.0 * (1.0 - pickup_km / max_pickup_distance_km));
    let rating = unit_score((driver.rating - 1.0) / 4.0 * 100.0);
    let load = if driver.capacity == 0 {
        0.0
    } else {
        unit_score(100.0 * (1.0 - driver.active_deliveries as f64 / driver.capacity as f64))
    };
    let tier = tier_score(driver.tier);
    let acceptance = unit_score(driver.acceptance_rate);
    let specialization = if driver.specializes_in(&order.cuisine) {
        100.0
    } else {
        0.0
    };

    let weighted = proximity * weights.proximity
        + rating * weights.rating
        + load * weights.load_balance
        + tier * weights.tier_bonus
        + acceptance * weights.acceptance_rate
        + specialization * weights.specialization;

    ScoreBreakdown {
        proximity,
        rating,
        load,
        tier,
        acceptance,
        specialization,
        total: round2(weighted.clamp(0.0, 100.0)),
    }
}

/// Mosaic score for `driver` serving `order`, using the default pickup radius.
pub fn score(driver: &DriverCandidate, order: &OrderInfo, weights: &MatchingWeights) -> f64 {
    score_breakdown(driver, order, weights, DEFAULT_MAX_PICKUP_DISTANCE_KM).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Coordinates;
    use crate::test_helpers::{driver_at, order_at, CASABLANCA_CENTER};

    #[test]
    fn perfect_driver_scores_100() {
        let order = order_at("o1", CASABLANCA_CENTER);
        let mut driver = driver_at("d1", CASABLANCA_CENTER);
        driver.rating = 5.0;
        driver.active_deliveries = 0;
        driver.tier = LoyaltyTier::Diamond;
        driver.acceptance_rate = 100.0;
        driver.specializations = vec![order.cuisine.clone()];

        assert_eq!(score(&driver, &order, &MatchingWeights::default()), 100.0);
    }

    #[test]
    fn mixed_driver_matches_hand_computed_score() {
        let order = order_at("o1", CASABLANCA_CENTER);
        let location = Coordinates::new(CASABLANCA_CENTER.lat + 0.045, CASABLANCA_CENTER.lng);
        let mut driver = driver_at("d1", location);
        driver.rating = 4.0;
        driver.active_deliveries = 1;
        driver.capacity = 2;
        driver.tier = LoyaltyTier::Gold;
        driver.acceptance_rate = 80.0;
        driver.specializations.clear();

        let breakdown =
            score_breakdown(&driver, &order, &MatchingWeights::default(), DEFAULT_MAX_PICKUP_DISTANCE_KM);
        assert!((breakdown.proximity - 49.96).abs() < 0.01);
        assert_eq!(breakdown.rating, 75.0);
        assert_eq!(breakdown.load, 50.0);
        assert_eq!(breakdown.tier, 40.0);
        assert_eq!(breakdown.specialization, 0.0);
        assert_eq!(breakdown.total, 53.49);
    }

    #[test]
    fn far_driver_gets_no_proximity_credit() {
        let order = order_at("o1", CASABLANCA_CENTER);
        let far = Coordinates::new(CASABLANCA_CENTER.lat + 0.5, CASABLANCA_CENTER.lng);
        let driver = driver_at("d1", far);
        let breakdown =
            score_breakdown(&driver, &order, &MatchingWeights::default(), DEFAULT_MAX_PICKUP_DISTANCE_KM);
        assert_eq!(breakdown.proximity, 0.0);
    }

    #[test]
    fn zero_capacity_driver_has_no_load_credit() {
        let order = order_at("o1", CASABLANCA_CENTER);
        let mut driver = driver_at("d1", CASABLANCA_CENTER);
        driver.capacity = 0;
        driver.active_deliveries = 0;
        let breakdown =
            score_breakdown(&driver, &order, &MatchingWeights::default(), DEFAULT_MAX_PICKUP_DISTANCE_KM);
        assert_eq!(breakdown.load, 0.0);
        assert!(breakdown.total.is_finite());
    }

    #[test]
    fn scoring_is_deterministic() {
        let order = order_at("o1", CASABLANCA_CENTER);
        let driver = driver_at("d1", Coordinates::new(33.58, -7.60));
        let weights = MatchingWeights::default();
        let first = score(&driver, &order, &weights);
        for _ in 0..10 {
            assert_eq!(score(&driver, &order, &weights), first);
        }
    }

    #[test]
    fn tier_table() {
        assert_eq!(tier_score(LoyaltyTier::Bronze), 0.0);
        assert_eq!(tier_score(LoyaltyTier::Silver), 20.0);
        assert_eq!(tier_score(LoyaltyTier::Gold), 40.0);
        assert_eq!(tier_score(LoyaltyTier::Platinum), 60.0);
        assert_eq!(tier_score(LoyaltyTier::Diamond), 100.0);
    }
}
