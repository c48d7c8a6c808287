//! Demand forecasting from historical order counts for a zone and hour.
//!
//! Expected orders are the mean of the history; confidence is
//! `100 × (1 − coefficient of variation)` clamped to `[0, 100]` using the
//! population standard deviation. One driver is assumed to serve
//! [`DEFAULT_ORDERS_PER_DRIVER`] concurrent orders.

use serde::{Deserialize, Serialize};

use crate::config::{DispatchConfig, DEFAULT_ORDERS_PER_DRIVER};
use crate::rounding::round2;

/// Projected demand for one zone at one hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandForecast {
    pub zone_id: String,
    pub hour: u32,
    pub expected_orders: f64,
    pub std_dev: f64,
    /// 0–100; higher means steadier history.
    pub confidence: f64,
    /// Extra drivers required on top of those available.
    pub drivers_needed: u32,
}

/// Forecast with the default orders-per-driver assumption.
pub fn forecast_demand(
    zone_id: &str,
    hour: u32,
    historical_counts: &[u32],
    available_drivers: u32,
) -> DemandForecast {
    forecast_demand_with_capacity(
        zone_id,
        hour,
        historical_counts,
        available_drivers,
        DEFAULT_ORDERS_PER_DRIVER,
    )
}

/// Forecast with the configured `orders_per_driver`.
pub fn forecast_demand_with_config(
    zone_id: &str,
    hour: u32,
    historical_counts: &[u32],
    available_drivers: u32,
    config: &DispatchConfig,
) -> DemandForecast {
    forecast_demand_with_capacity(
        zone_id,
        hour,
        historical_counts,
        available_drivers,
        config.orders_per_driver,
    )
}

/// Forecast assuming each driver serves `orders_per_driver` concurrent orders.
pub fn forecast_demand_with_capacity(
    zone_id: &str,
    hour: u32,
    historical_counts: &[u32],
    available_drivers: u32,
    orders_per_driver: u32,
) -> DemandForecast {
    if historical_counts.is_empty() {
        return DemandForecast {
            zone_id: zone_id.to_string(),
            hour,
            expected_orders: 0.0,
            std_dev: 0.0,
            confidence: 0.0,
            drivers_needed: 0,
        };
    }

    let n = historical_counts.len() as f64;
    let mean = historical_counts.iter().map(|&c| c as f64).sum::<f64>() / n;
    let variance = historical_counts
        .iter()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    // A flat zero history is perfectly consistent.
    let coefficient_of_variation = if mean == 0.0 { 0.0 } else { std_dev / mean };
    let confidence = (100.0 * (1.0 - coefficient_of_variation)).clamp(0.0, 100.0);

    let per_driver = orders_per_driver.max(1) as f64;
    let required = (mean / per_driver).ceil() as i64;
    let drivers_needed = (required - available_drivers as i64).max(0) as u32;

    DemandForecast {
        zone_id: zone_id.to_string(),
        hour,
        expected_orders: round2(mean),
        std_dev: round2(std_dev),
        confidence: round2(confidence),
        drivers_needed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_zero_forecast() {
        let forecast = forecast_demand("anfa", 12, &[], 4);
        assert_eq!(forecast.expected_orders, 0.0);
        assert_eq!(forecast.confidence, 0.0);
        assert_eq!(forecast.drivers_needed, 0);
    }

    #[test]
    fn steady_history_is_fully_confident() {
        let forecast = forecast_demand("anfa", 19, &[12, 12, 12], 1);
        assert_eq!(forecast.expected_orders, 12.0);
        assert_eq!(forecast.confidence, 100.0);
        assert_eq!(forecast.drivers_needed, 3);
    }

    #[test]
    fn noisy_history_lowers_confidence() {
        // mean 10, population std dev 2
        let forecast = forecast_demand("maarif", 13, &[8, 12, 8, 12], 0);
        assert_eq!(forecast.expected_orders, 10.0);
        assert_eq!(forecast.std_dev, 2.0);
        assert_eq!(forecast.confidence, 80.0);
        assert_eq!(forecast.drivers_needed, 4);
    }

    #[test]
    fn confidence_never_negative() {
        let forecast = forecast_demand("maarif", 3, &[0, 0, 0, 30], 0);
        assert_eq!(forecast.confidence, 0.0);
    }

    #[test]
    fn enough_drivers_need_no_more() {
        let forecast = forecast_demand("gauthier", 8, &[9, 9], 5);
        assert_eq!(forecast.drivers_needed, 0);
    }

    #[test]
    fn custom_orders_per_driver() {
        let forecast = forecast_demand_with_capacity("gauthier", 8, &[10], 0, 2);
        assert_eq!(forecast.drivers_needed, 5);
    }

    #[test]
    fn configured_orders_per_driver_changes_staffing() {
        let config = DispatchConfig::from_json_str(r#"{"orders_per_driver": 2}"#)
            .expect("valid config");
        let history = [9, 9, 9];
        assert_eq!(forecast_demand("ain-diab", 20, &history, 1).drivers_needed, 2);
        assert_eq!(
            forecast_demand_with_config("ain-diab", 20, &history, 1, &config).drivers_needed,
            4
        );
    }
}
