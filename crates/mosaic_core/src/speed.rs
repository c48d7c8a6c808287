//! City speed profiles: average travel speed and contextual slow-down factors.
//!
//! The built-in table covers the cities the platform operates in. A
//! [`CityRegistry`] can also be built from configuration; it is immutable once
//! constructed and safe to share between threads without locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// City used whenever a lookup key is unknown.
pub const DEFAULT_CITY: &str = "casablanca";

/// Travel characteristics of one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySpeedProfile {
    pub city: String,
    /// Free-flow average speed (km/h).
    pub avg_speed_kmh: f64,
    /// Speed multiplier applied during rush hours.
    pub peak_multiplier: f64,
    /// Speed multiplier applied inside the old quarter (medina).
    pub medina_multiplier: f64,
    pub has_medina: bool,
}

impl CitySpeedProfile {
    fn builtin(
        city: &str,
        avg_speed_kmh: f64,
        peak_multiplier: f64,
        medina_multiplier: f64,
        has_medina: bool,
    ) -> Self {
        Self {
            city: city.to_string(),
            avg_speed_kmh,
            peak_multiplier,
            medina_multiplier,
            has_medina,
        }
    }
}

fn builtin_profiles() -> Vec<CitySpeedProfile> {
    vec![
        CitySpeedProfile::builtin("casablanca", 25.0, 0.6, 0.5, true),
        CitySpeedProfile::builtin("rabat", 30.0, 0.7, 0.6, true),
        CitySpeedProfile::builtin("marrakech", 22.0, 0.65, 0.4, true),
        CitySpeedProfile::builtin("fes", 20.0, 0.7, 0.35, true),
        CitySpeedProfile::builtin("tangier", 28.0, 0.65, 0.5, true),
        CitySpeedProfile::builtin("meknes", 26.0, 0.75, 0.45, true),
        CitySpeedProfile::builtin("agadir", 35.0, 0.8, 1.0, false),
    ]
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

/// Read-only lookup from city key to [`CitySpeedProfile`].
#[derive(Debug, Clone)]
pub struct CityRegistry {
    profiles: HashMap<String, CitySpeedProfile>,
    default_city: String,
    fallback: CitySpeedProfile,
}

impl CityRegistry {
    /// Registry over the built-in city table.
    pub fn builtin() -> &'static CityRegistry {
        static BUILTIN: OnceLock<CityRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| CityRegistry::from_profiles(builtin_profiles(), DEFAULT_CITY))
    }

    /// Build a registry from configured profiles.
    ///
    /// Unknown keys resolve to `default_city`; if that city is not among the
    /// profiles either, the built-in casablanca profile is used.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = CitySpeedProfile>,
        default_city: &str,
    ) -> Self {
        let profiles: HashMap<String, CitySpeedProfile> = profiles
            .into_iter()
            .map(|profile| (normalize_key(&profile.city), profile))
            .collect();
        let fallback = builtin_profiles()
            .into_iter()
            .find(|profile| profile.city == DEFAULT_CITY)
            .unwrap_or_else(|| CitySpeedProfile::builtin(DEFAULT_CITY, 25.0, 0.6, 0.5, true));
        Self {
            profiles,
            default_city: normalize_key(default_city),
            fallback,
        }
    }

    /// Copy of this registry that resolves unknown keys to `city`.
    pub fn with_default_city(&self, city: &str) -> Self {
        Self {
            default_city: normalize_key(city),
            ..self.clone()
        }
    }

    /// Profile for `city`, falling back to the default city for unknown keys.
    pub fn profile(&self, city: &str) -> &CitySpeedProfile {
        self.profiles
            .get(&normalize_key(city))
            .or_else(|| self.profiles.get(&self.default_city))
            .unwrap_or(&self.fallback)
    }

    /// Whether `city` has an explicit profile (no fallback).
    pub fn contains(&self, city: &str) -> bool {
        self.profiles.contains_key(&normalize_key(city))
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

/// Built-in profile for `city`, falling back to casablanca.
pub fn city_profile(city: &str) -> &'static CitySpeedProfile {
    CityRegistry::builtin().profile(city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_resolves() {
        let fes = city_profile("fes");
        assert_eq!(fes.city, "fes");
        assert!(fes.has_medina);
        assert!(!city_profile("agadir").has_medina);
    }

    #[test]
    fn unknown_city_falls_back_to_casablanca() {
        assert_eq!(city_profile("atlantis").city, "casablanca");
        assert_eq!(city_profile("").city, "casablanca");
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(city_profile("  Rabat ").city, "rabat");
        assert!(CityRegistry::builtin().contains("MARRAKECH"));
    }

    #[test]
    fn configured_registry_uses_its_own_default() {
        let registry = CityRegistry::from_profiles(
            vec![CitySpeedProfile::builtin("oujda", 30.0, 0.8, 0.6, true)],
            "oujda",
        );
        assert_eq!(registry.profile("nowhere").city, "oujda");

        let empty = CityRegistry::from_profiles(Vec::new(), "nowhere");
        assert_eq!(empty.profile("x").city, "casablanca");
    }

    #[test]
    fn default_city_override_leaves_builtin_untouched() {
        let registry = CityRegistry::builtin().with_default_city(" Tangier ");
        assert_eq!(registry.profile("nowhere").city, "tangier");
        assert_eq!(CityRegistry::builtin().profile("nowhere").city, "casablanca");
    }
}
