use chrono::NaiveDateTime;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, DispatchConfig};
use crate::period::{classify_period, TimePeriod};
use crate::rounding::round2;
use crate::spatial::distance_km;
use crate::speed::{CityRegistry, CitySpeedProfile};
use crate::traffic::estimate_travel_minutes_floored;

use super::algorithm::MatchingAlgorithm;
use super::priority::order_priority;
use super::score::score_breakdown;
use super::types::{DriverCandidate, LoyaltyTier, MatchResult, OrderInfo};
use super::weights::{adjust_weights, MatchingWeights};

/// Pickup distance (km) under which a driver is tagged "very close".
const VERY_CLOSE_KM: f64 = 2.0;
const HIGHLY_RATED: f64 = 4.5;
const RELIABLE_ACCEPTANCE: f64 = 90.0;

/// Spare capacity and within the pickup radius.
pub fn is_eligible(driver: &DriverCandidate, order: &OrderInfo, max_pickup_distance_km: f64) -> bool {
    driver.has_capacity() && distance_km(driver.location, order.pickup) <= max_pickup_distance_km
}

fn match_reasons(driver: &DriverCandidate, order: &OrderInfo, pickup_km: f64) -> Vec<String> {
    let mut reasons = Vec::new();
    if pickup_km < VERY_CLOSE_KM {
        reasons.push("very close".to_string());
    }
    if driver.rating >= HIGHLY_RATED {
        reasons.push("highly rated".to_string());
    }
    if driver.active_deliveries == 0 {
        reasons.push("currently available".to_string());
    }
    if driver.specializes_in(&order.cuisine) {
        reasons.push(format!("specializes in {}", order.cuisine));
    }
    if driver.tier >= LoyaltyTier::Platinum {
        reasons.push(format!("{} tier", driver.tier.label()));
    }
    if driver.acceptance_rate >= RELIABLE_ACCEPTANCE {
        reasons.push("reliable".to_string());
    }
    reasons
}

/// Best driver for `order` under the default thresholds.
///
/// `weights` are used as given; callers wanting time-of-day sensitivity pass
/// the output of [`adjust_weights`].
pub fn best_driver_for(
    order: &OrderInfo,
    drivers: &[DriverCandidate],
    weights: &MatchingWeights,
    city: &CitySpeedProfile,
    period: TimePeriod,
) -> Option<MatchResult> {
    best_driver_for_with_config(order, drivers, weights, city, period, &DispatchConfig::default())
}

/// Best driver for `order`.
///
/// 1. Keep drivers with spare capacity within `max_pickup_distance_km`
/// 2. Score each with the Mosaic score; the first maximum wins ties
/// 3. Reject when nobody is eligible or the best score is below
///    `min_score_threshold`
/// 4. Attach pickup/delivery ETAs, distance and explanation tags
pub fn best_driver_for_with_config(
    order: &OrderInfo,
    drivers: &[DriverCandidate],
    weights: &MatchingWeights,
    city: &CitySpeedProfile,
    period: TimePeriod,
    config: &DispatchConfig,
) -> Option<MatchResult> {
    let mut best: Option<(&DriverCandidate, f64)> = None;

    for driver in drivers {
        if !is_eligible(driver, order, config.max_pickup_distance_km) {
            continue;
        }
        let score = score_breakdown(driver, order, weights, config.max_pickup_distance_km).total;
        trace!("order {} driver {} score {score}", order.id, driver.id);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((driver, score)),
        }
    }

    let Some((driver, score)) = best else {
        debug!("order {}: no eligible driver", order.id);
        return None;
    };
    if score < config.min_score_threshold {
        debug!(
            "order {}: best driver {} scored {score}, below threshold {}",
            order.id, driver.id, config.min_score_threshold
        );
        return None;
    }

    let pickup_km = distance_km(driver.location, order.pickup);
    let trip_km = distance_km(order.pickup, order.dropoff);
    let pickup_minutes = estimate_travel_minutes_floored(
        driver.location,
        order.pickup,
        city,
        driver.in_medina,
        period,
        config.walking_speed_kmh,
    );
    let trip_minutes = estimate_travel_minutes_floored(
        order.pickup,
        order.dropoff,
        city,
        driver.in_medina,
        period,
        config.walking_speed_kmh,
    );

    debug!(
        "order {} matched to driver {} (score {score}, pickup {pickup_minutes} min)",
        order.id, driver.id
    );

    Some(MatchResult {
        driver_id: driver.id.clone(),
        order_id: order.id.clone(),
        score,
        estimated_pickup_minutes: pickup_minutes,
        estimated_delivery_minutes: round2(pickup_minutes + trip_minutes),
        total_distance_km: round2(pickup_km + trip_km),
        reasons: match_reasons(driver, order, pickup_km),
    })
}

/// Outcome of a capacity-aware batch pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchAssignment {
    pub matches: Vec<MatchResult>,
    pub unassigned: Vec<String>,
}

/// Match several orders while respecting each driver's spare capacity.
///
/// Orders are processed by descending [`order_priority`] at `now` (ties keep
/// input order). Each match consumes one slot of the chosen driver on a local
/// copy of the snapshot, so no driver is recommended beyond capacity within the
/// pass. The inputs are not modified.
pub fn assign_batch(
    orders: &[OrderInfo],
    drivers: &[DriverCandidate],
    now: NaiveDateTime,
    weights: &MatchingWeights,
    city: &CitySpeedProfile,
    period: TimePeriod,
    config: &DispatchConfig,
) -> BatchAssignment {
    let mut queue: Vec<(u32, &OrderInfo)> = orders
        .iter()
        .map(|order| (order_priority(order, now), order))
        .collect();
    queue.sort_by(|(a, _), (b, _)| b.cmp(a));

    let mut pool = drivers.to_vec();
    let mut assignment = BatchAssignment::default();

    for (_, order) in queue {
        match best_driver_for_with_config(order, &pool, weights, city, period, config) {
            Some(result) => {
                if let Some(driver) = pool.iter_mut().find(|d| d.id == result.driver_id) {
                    driver.active_deliveries += 1;
                }
                assignment.matches.push(result);
            }
            None => assignment.unassigned.push(order.id.clone()),
        }
    }

    debug!(
        "batch pass: {} matched, {} unassigned",
        assignment.matches.len(),
        assignment.unassigned.len()
    );
    assignment
}

/// Evaluate each order independently against the same snapshot.
pub fn evaluate_orders(
    orders: &[OrderInfo],
    drivers: &[DriverCandidate],
    weights: &MatchingWeights,
    city: &CitySpeedProfile,
    period: TimePeriod,
    config: &DispatchConfig,
) -> Vec<Option<MatchResult>> {
    orders
        .iter()
        .map(|order| best_driver_for_with_config(order, drivers, weights, city, period, config))
        .collect()
}

/// Parallel form of [`evaluate_orders`]; results keep the input order.
#[cfg(feature = "parallel")]
pub fn evaluate_orders_parallel(
    orders: &[OrderInfo],
    drivers: &[DriverCandidate],
    weights: &MatchingWeights,
    city: &CitySpeedProfile,
    period: TimePeriod,
    config: &DispatchConfig,
) -> Vec<Option<MatchResult>> {
    use rayon::prelude::*;

    orders
        .par_iter()
        .map(|order| best_driver_for_with_config(order, drivers, weights, city, period, config))
        .collect()
}

/// Context-aware matcher: classifies the period from the order time, adjusts
/// the configured base weights and picks the best driver in its city.
#[derive(Debug, Clone)]
pub struct MosaicMatching {
    config: DispatchConfig,
    registry: CityRegistry,
    city: String,
    period_override: Option<TimePeriod>,
}

impl MosaicMatching {
    /// Matcher for `city` under `config`, which is validated first.
    pub fn new(config: DispatchConfig, city: impl Into<String>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config, city.into()))
    }

    fn from_validated(config: DispatchConfig, city: String) -> Self {
        let registry = config.city_registry();
        Self {
            config,
            registry,
            city,
            period_override: None,
        }
    }

    /// Force a period regardless of the clock, e.g. during Ramadan iftar.
    pub fn with_period_override(mut self, period: TimePeriod) -> Self {
        self.period_override = Some(period);
        self
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn city(&self) -> &CitySpeedProfile {
        self.registry.profile(&self.city)
    }

    /// Period in effect at `at`.
    pub fn period_at(&self, at: NaiveDateTime) -> TimePeriod {
        self.period_override.unwrap_or_else(|| classify_period(&at))
    }

    /// Base weights adjusted for the period at `at`.
    pub fn weights_at(&self, at: NaiveDateTime) -> MatchingWeights {
        adjust_weights(self.period_at(at), &self.config.base_weights)
    }

    /// Capacity-aware batch pass at `now`.
    pub fn assign_batch(
        &self,
        orders: &[OrderInfo],
        drivers: &[DriverCandidate],
        now: NaiveDateTime,
    ) -> BatchAssignment {
        assign_batch(
            orders,
            drivers,
            now,
            &self.weights_at(now),
            self.city(),
            self.period_at(now),
            &self.config,
        )
    }
}

impl Default for MosaicMatching {
    fn default() -> Self {
        let config = DispatchConfig::default();
        let city = config.default_city.clone();
        Self::from_validated(config, city)
    }
}

impl MatchingAlgorithm for MosaicMatching {
    fn find_match(
        &self,
        order: &OrderInfo,
        drivers: &[DriverCandidate],
        at: NaiveDateTime,
    ) -> Option<MatchResult> {
        let period = self.period_at(at);
        let weights = adjust_weights(period, &self.config.base_weights);
        best_driver_for_with_config(order, drivers, &weights, self.city(), period, &self.config)
    }
}
