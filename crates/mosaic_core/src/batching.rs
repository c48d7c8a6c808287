//! Greedy spatial batching of pending orders.
//!
//! Orders are visited by descending base priority. Each unassigned order seeds
//! a cluster that absorbs every other unassigned order whose pickup lies within
//! `radius_km` of the seed's pickup. Membership is tested against the seed, not
//! a running centroid, so clusters may be elongated. The reported radius is
//! computed afterwards as the largest member distance from the centroid.
//!
//! Every input order lands in exactly one cluster.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::matching::OrderInfo;
use crate::rounding::round2;
use crate::spatial::{centroid, distance_km, Coordinates};

/// A group of orders that can be picked up together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCluster {
    /// Mean of the member pickups.
    pub centroid: Coordinates,
    pub orders: Vec<OrderInfo>,
    /// Largest member distance from the centroid (km).
    pub radius_km: f64,
}

impl BatchCluster {
    pub fn order_ids(&self) -> impl Iterator<Item = &str> {
        self.orders.iter().map(|order| order.id.as_str())
    }
}

/// Partition `orders` into pickup clusters of seed radius `radius_km`.
pub fn cluster_orders(orders: &[OrderInfo], radius_km: f64) -> Vec<BatchCluster> {
    let mut by_priority: Vec<&OrderInfo> = orders.iter().collect();
    by_priority.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut assigned = vec![false; by_priority.len()];
    let mut clusters = Vec::new();

    for seed_idx in 0..by_priority.len() {
        if assigned[seed_idx] {
            continue;
        }
        assigned[seed_idx] = true;
        let seed = by_priority[seed_idx];
        let mut members = vec![seed.clone()];

        for (idx, candidate) in by_priority.iter().enumerate() {
            if assigned[idx] {
                continue;
            }
            if distance_km(seed.pickup, candidate.pickup) <= radius_km {
                assigned[idx] = true;
                members.push((*candidate).clone());
            }
        }

        let center = centroid(members.iter().map(|order| order.pickup)).unwrap_or(seed.pickup);
        let radius = members
            .iter()
            .map(|order| distance_km(center, order.pickup))
            .fold(0.0, f64::max);

        clusters.push(BatchCluster {
            centroid: center,
            orders: members,
            radius_km: round2(radius),
        });
    }

    debug!("clustered {} orders into {} batches", orders.len(), clusters.len());
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{order_at, CASABLANCA_CENTER};

    fn order(id: &str, lat_delta: f64, priority: u8) -> OrderInfo {
        let mut order = order_at(
            id,
            Coordinates::new(CASABLANCA_CENTER.lat + lat_delta, CASABLANCA_CENTER.lng),
        );
        order.priority = priority;
        order
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        assert!(cluster_orders(&[], 2.0).is_empty());
    }

    #[test]
    fn single_order_forms_zero_radius_cluster() {
        let only = order("o1", 0.0, 5);
        let clusters = cluster_orders(&[only.clone()], 2.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].orders, vec![only.clone()]);
        assert_eq!(clusters[0].radius_km, 0.0);
        assert_eq!(clusters[0].centroid, only.pickup);
    }

    #[test]
    fn nearby_orders_share_a_cluster() {
        // 0.01 degree of latitude is ~1.1 km
        let orders = vec![order("a", 0.0, 5), order("b", 0.01, 5), order("c", 0.2, 5)];
        let clusters = cluster_orders(&orders, 2.0);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].order_ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(clusters[1].order_ids().collect::<Vec<_>>(), vec!["c"]);
        assert!((clusters[0].radius_km - 0.56).abs() < 0.01);
    }

    #[test]
    fn membership_is_tested_against_the_seed() {
        // b is within 2 km of a; c is within 2 km of b but not of a.
        let orders = vec![order("a", 0.0, 9), order("b", 0.015, 5), order("c", 0.03, 5)];
        let clusters = cluster_orders(&orders, 2.0);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].order_ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(clusters[1].order_ids().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn highest_priority_order_seeds_first() {
        let orders = vec![order("low", 0.0, 1), order("high", 0.015, 8), order("far", 0.03, 1)];
        let clusters = cluster_orders(&orders, 2.0);
        // "high" sits between the others and absorbs both
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].orders[0].id, "high");
    }
}
