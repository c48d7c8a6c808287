//! Aggregate statistics over one matching pass.

use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;
use crate::rounding::round2;

/// Summary of a set of [`MatchResult`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentStats {
    pub total_orders: usize,
    pub assigned: usize,
    pub unassigned: usize,
    /// Assigned share of `total_orders`, in percent.
    pub assignment_rate: f64,
    pub avg_score: f64,
    pub avg_pickup_minutes: f64,
    pub avg_distance_km: f64,
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    round2(values.sum::<f64>() / count as f64)
}

/// Summarize `results` produced for `total_orders` pending orders.
pub fn summarize(results: &[MatchResult], total_orders: usize) -> AssignmentStats {
    if results.is_empty() {
        return AssignmentStats {
            total_orders,
            unassigned: total_orders,
            ..AssignmentStats::default()
        };
    }

    let assigned = results.len();
    let assignment_rate = if total_orders == 0 {
        0.0
    } else {
        round2(assigned as f64 / total_orders as f64 * 100.0)
    };

    AssignmentStats {
        total_orders,
        assigned,
        unassigned: total_orders.saturating_sub(assigned),
        assignment_rate,
        avg_score: mean(results.iter().map(|r| r.score), assigned),
        avg_pickup_minutes: mean(results.iter().map(|r| r.estimated_pickup_minutes), assigned),
        avg_distance_km: mean(results.iter().map(|r| r.total_distance_km), assigned),
    }
}
