//! Whether an in-flight assignment should move to another driver.
//!
//! Decision order:
//!
//! 1. Before the reassessment window has passed: never reassign
//! 2. Current driver still reaches the pickup within the wait budget: keep
//! 3. Otherwise look for the alternative with the lowest pickup ETA, skipping
//!    the current driver and drivers without spare capacity
//! 4. Reassign only when that alternative is strictly faster and saves more
//!    than the minimum gain

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DispatchConfig;
use crate::matching::DriverCandidate;
use crate::period::TimePeriod;
use crate::rounding::round2;
use crate::spatial::Coordinates;
use crate::speed::CitySpeedProfile;
use crate::traffic::estimate_travel_minutes_floored;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReassignmentEvaluation {
    pub should_reassign: bool,
    pub current_driver_id: String,
    pub recommended_driver_id: Option<String>,
    /// Current driver's pickup ETA; 0 when not evaluated.
    pub current_eta_minutes: f64,
    pub best_alternative_eta_minutes: Option<f64>,
    pub time_saved_minutes: f64,
    pub reason: String,
}

impl ReassignmentEvaluation {
    fn keep(current_driver_id: &str, current_eta_minutes: f64, reason: impl Into<String>) -> Self {
        Self {
            should_reassign: false,
            current_driver_id: current_driver_id.to_string(),
            recommended_driver_id: None,
            current_eta_minutes,
            best_alternative_eta_minutes: None,
            time_saved_minutes: 0.0,
            reason: reason.into(),
        }
    }
}

/// Evaluate with the default window and minimum gain.
pub fn evaluate_reassignment(
    current: &DriverCandidate,
    pickup: Coordinates,
    alternatives: &[DriverCandidate],
    elapsed_minutes: f64,
    max_wait_minutes: f64,
    city: &CitySpeedProfile,
    period: TimePeriod,
) -> ReassignmentEvaluation {
    evaluate_reassignment_with_config(
        current,
        pickup,
        alternatives,
        elapsed_minutes,
        max_wait_minutes,
        city,
        period,
        &DispatchConfig::default(),
    )
}

#[allow(clippy::too_many_arguments)]
pub fn evaluate_reassignment_with_config(
    current: &DriverCandidate,
    pickup: Coordinates,
    alternatives: &[DriverCandidate],
    elapsed_minutes: f64,
    max_wait_minutes: f64,
    city: &CitySpeedProfile,
    period: TimePeriod,
    config: &DispatchConfig,
) -> ReassignmentEvaluation {
    if elapsed_minutes < config.reassessment_window_minutes {
        return ReassignmentEvaluation::keep(&current.id, 0.0, "too early to reassess");
    }

    let eta_for = |driver: &DriverCandidate| {
        estimate_travel_minutes_floored(
            driver.location,
            pickup,
            city,
            driver.in_medina,
            period,
            config.walking_speed_kmh,
        )
    };

    let current_eta = eta_for(current);
    if current_eta + elapsed_minutes <= max_wait_minutes {
        return ReassignmentEvaluation::keep(&current.id, current_eta, "current driver on track");
    }

    let mut best: Option<(&DriverCandidate, f64)> = None;
    for driver in alternatives {
        if driver.id == current.id || !driver.has_capacity() {
            continue;
        }
        let eta = eta_for(driver);
        match best {
            Some((_, best_eta)) if eta >= best_eta => {}
            _ => best = Some((driver, eta)),
        }
    }

    let Some((candidate, candidate_eta)) = best else {
        debug!("driver {} late but no alternative available", current.id);
        return ReassignmentEvaluation::keep(&current.id, current_eta, "no alternative driver");
    };

    let time_saved = round2(current_eta - candidate_eta);
    let should_reassign =
        candidate_eta < current_eta && time_saved > config.min_time_saved_minutes;
    debug!(
        "driver {} eta {current_eta}, best alternative {} eta {candidate_eta}, reassign: {should_reassign}",
        current.id, candidate.id
    );

    ReassignmentEvaluation {
        should_reassign,
        current_driver_id: current.id.clone(),
        recommended_driver_id: should_reassign.then(|| candidate.id.clone()),
        current_eta_minutes: current_eta,
        best_alternative_eta_minutes: Some(candidate_eta),
        time_saved_minutes: time_saved.max(0.0),
        reason: if should_reassign {
            format!("{} saves {time_saved} minutes", candidate.id)
        } else {
            "time saved below threshold".to_string()
        },
    }
}
