//! Mosaic order-to-driver matching and dispatch scoring.
//!
//! A pure, synchronous library: every function takes value snapshots of
//! drivers and orders and returns a new value. Nothing here performs I/O or
//! holds mutable shared state, so calls can run concurrently from any number
//! of threads. Persisting and committing assignments is the caller's job.
//!
//! ```rust
//! use mosaic_core::matching::{adjust_weights, best_driver_for, MatchingWeights};
//! use mosaic_core::period::classify_period;
//! use mosaic_core::speed::city_profile;
//! use mosaic_core::test_helpers::{driver_at, order_at, CASABLANCA_CENTER};
//!
//! let order = order_at("order-1", CASABLANCA_CENTER);
//! let drivers = vec![driver_at("driver-1", CASABLANCA_CENTER)];
//! let period = classify_period(&order.created_at);
//! let weights = adjust_weights(period, &MatchingWeights::default());
//!
//! let result = best_driver_for(&order, &drivers, &weights, city_profile("casablanca"), period);
//! assert_eq!(result.map(|m| m.driver_id), Some("driver-1".to_string()));
//! ```

pub mod batching;
pub mod config;
pub mod forecast;
pub mod matching;
pub mod metrics;
pub mod period;
pub mod pricing;
pub mod reassignment;
pub mod rounding;
pub mod routing;
pub mod spatial;
pub mod speed;
pub mod traffic;
pub mod zones;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use batching::{cluster_orders, BatchCluster};
pub use config::{ConfigError, DispatchConfig};
pub use forecast::{forecast_demand, forecast_demand_with_config, DemandForecast};
pub use metrics::{summarize, AssignmentStats};
pub use period::{classify_period, TimePeriod};
pub use pricing::{surge_pricing, SurgePricingResult};
pub use reassignment::{evaluate_reassignment, ReassignmentEvaluation};
pub use routing::{optimize_route, RoutePlan};
pub use spatial::{bearing_degrees, distance_km, Coordinates};
pub use speed::{city_profile, CityRegistry, CitySpeedProfile};
pub use traffic::{
    estimate_delivery_eta, estimate_delivery_eta_floored, estimate_travel_minutes, DeliveryEta,
};
pub use zones::{drivers_in_zone, zone_for, DeliveryZone};
