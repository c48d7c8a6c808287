use chrono::NaiveDateTime;

use super::types::{DriverCandidate, MatchResult, OrderInfo};

/// Trait for matching algorithms that recommend a driver for a pending order.
///
/// Implementations are pure: they read the order and the driver snapshot and
/// return a recommendation. Committing the assignment, and resolving races
/// between concurrent passes, belongs to the dispatch orchestrator.
///
/// # Examples
///
/// ```rust
/// use mosaic_core::matching::{MatchingAlgorithm, MosaicMatching};
/// use mosaic_core::test_helpers::{driver_at, order_at, CASABLANCA_CENTER};
///
/// let algorithm = MosaicMatching::default();
/// let order = order_at("order-1", CASABLANCA_CENTER);
/// let drivers = vec![driver_at("driver-1", CASABLANCA_CENTER)];
/// let result = algorithm.find_match(&order, &drivers, order.created_at);
/// assert_eq!(result.map(|m| m.driver_id), Some("driver-1".to_string()));
/// ```
pub trait MatchingAlgorithm: Send + Sync {
    /// Find the best driver for a single order at local time `at`.
    ///
    /// Returns `None` when no driver is eligible or none scores high enough.
    fn find_match(
        &self,
        order: &OrderInfo,
        drivers: &[DriverCandidate],
        at: NaiveDateTime,
    ) -> Option<MatchResult>;

    /// Find matches for several orders against the same driver snapshot.
    ///
    /// The default implementation calls `find_match` for each order
    /// independently, so the same driver may be recommended for several
    /// orders. Use [`super::assign_batch`] when capacity must be respected
    /// across the batch.
    fn find_batch_matches(
        &self,
        orders: &[OrderInfo],
        drivers: &[DriverCandidate],
        at: NaiveDateTime,
    ) -> Vec<MatchResult> {
        orders
            .iter()
            .filter_map(|order| self.find_match(order, drivers, at))
            .collect()
    }
}
