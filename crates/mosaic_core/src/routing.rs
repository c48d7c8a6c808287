//! Multi-stop sequencing with the nearest-neighbor heuristic.
//!
//! Starting from the driver's position, repeatedly travel to the closest
//! unvisited stop. O(n²) in the number of stops and typically within a few tens
//! of percent of the optimal tour; it is a dispatch heuristic, not a TSP solver.

use serde::{Deserialize, Serialize};

use crate::rounding::round2;
use crate::spatial::{distance_km, Coordinates};

/// Visiting order produced by [`optimize_route`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Indices into the input stops, in visiting order.
    pub sequence: Vec<usize>,
    /// The stops themselves, in visiting order.
    pub stops: Vec<Coordinates>,
    /// Great-circle length of the tour from the start (km).
    pub total_distance_km: f64,
}

/// Order `stops` by nearest neighbor from `start`. Ties go to the earlier stop.
pub fn optimize_route(start: Coordinates, stops: &[Coordinates]) -> RoutePlan {
    let n = stops.len();
    let mut visited = vec![false; n];
    let mut sequence = Vec::with_capacity(n);
    let mut current = start;
    let mut total = 0.0;

    for _ in 0..n {
        let mut best: Option<(usize, f64)> = None;
        for (i, stop) in stops.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = distance_km(current, *stop);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        let Some((next, d)) = best else {
            break;
        };
        visited[next] = true;
        sequence.push(next);
        total += d;
        current = stops[next];
    }

    RoutePlan {
        stops: sequence.iter().map(|&i| stops[i]).collect(),
        sequence,
        total_distance_km: round2(total),
    }
}
