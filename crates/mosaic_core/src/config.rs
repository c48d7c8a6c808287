//! Dispatch tunables and their JSON loading.
//!
//! Every threshold the engine uses has a default here. The plain functions in
//! this crate use [`DispatchConfig::default`]; the `*_with_config` variants take
//! an explicit configuration supplied by the ops layer.

use serde::{Deserialize, Serialize};

use crate::matching::MatchingWeights;
use crate::speed::{CityRegistry, CitySpeedProfile, DEFAULT_CITY};
use crate::traffic::WALKING_SPEED_KMH;

/// Maximum distance (km) between a driver and a pickup for eligibility.
pub const DEFAULT_MAX_PICKUP_DISTANCE_KM: f64 = 10.0;

/// Minimum Mosaic score a match must reach to be recommended.
pub const DEFAULT_MIN_SCORE_THRESHOLD: f64 = 20.0;

/// Minutes an assignment must run before it may be reconsidered.
pub const DEFAULT_REASSESSMENT_WINDOW_MINUTES: f64 = 15.0;

/// Minimum pickup-time gain (minutes) that justifies a reassignment.
pub const DEFAULT_MIN_TIME_SAVED_MINUTES: f64 = 5.0;

/// Concurrent orders one driver is assumed to serve when forecasting.
pub const DEFAULT_ORDERS_PER_DRIVER: u32 = 3;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub max_pickup_distance_km: f64,
    pub min_score_threshold: f64,
    pub reassessment_window_minutes: f64,
    pub min_time_saved_minutes: f64,
    pub orders_per_driver: u32,
    /// Lowest effective travel speed (km/h) an ETA may use.
    pub walking_speed_kmh: f64,
    pub default_city: String,
    pub base_weights: MatchingWeights,
    /// City profiles. Empty means the built-in table.
    pub city_profiles: Vec<CitySpeedProfile>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_pickup_distance_km: DEFAULT_MAX_PICKUP_DISTANCE_KM,
            min_score_threshold: DEFAULT_MIN_SCORE_THRESHOLD,
            reassessment_window_minutes: DEFAULT_REASSESSMENT_WINDOW_MINUTES,
            min_time_saved_minutes: DEFAULT_MIN_TIME_SAVED_MINUTES,
            orders_per_driver: DEFAULT_ORDERS_PER_DRIVER,
            walking_speed_kmh: WALKING_SPEED_KMH,
            default_city: DEFAULT_CITY.to_string(),
            base_weights: MatchingWeights::default(),
            city_profiles: Vec::new(),
        }
    }
}

/// Errors raised while loading a [`DispatchConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    Invalid(String),
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Json(err) => write!(f, "invalid dispatch config JSON: {err}"),
            ConfigError::Invalid(message) => write!(f, "invalid dispatch config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(format!("{name} must be a positive number, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(format!("{name} must be non-negative, got {value}")))
    }
}

impl DispatchConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DispatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_pickup_distance_km", self.max_pickup_distance_km)?;
        positive("walking_speed_kmh", self.walking_speed_kmh)?;
        non_negative("reassessment_window_minutes", self.reassessment_window_minutes)?;
        non_negative("min_time_saved_minutes", self.min_time_saved_minutes)?;
        if !(0.0..=100.0).contains(&self.min_score_threshold) {
            return Err(ConfigError::invalid(format!(
                "min_score_threshold must be within [0, 100], got {}",
                self.min_score_threshold
            )));
        }
        if self.orders_per_driver == 0 {
            return Err(ConfigError::invalid("orders_per_driver must be at least 1"));
        }
        if self.default_city.trim().is_empty() {
            return Err(ConfigError::invalid("default_city cannot be empty"));
        }
        for (name, value) in self.base_weights.named() {
            non_negative(&format!("base_weights.{name}"), value)?;
        }
        for profile in &self.city_profiles {
            if profile.city.trim().is_empty() {
                return Err(ConfigError::invalid("city profile name cannot be empty"));
            }
            positive(&format!("{}.avg_speed_kmh", profile.city), profile.avg_speed_kmh)?;
            non_negative(&format!("{}.peak_multiplier", profile.city), profile.peak_multiplier)?;
            non_negative(
                &format!("{}.medina_multiplier", profile.city),
                profile.medina_multiplier,
            )?;
        }
        Ok(())
    }

    /// City registry for this configuration.
    pub fn city_registry(&self) -> CityRegistry {
        if self.city_profiles.is_empty() {
            CityRegistry::builtin().with_default_city(&self.default_city)
        } else {
            CityRegistry::from_profiles(self.city_profiles.iter().cloned(), &self.default_city)
        }
    }
}
