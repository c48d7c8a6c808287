pub mod algorithm;
pub mod mosaic;
pub mod priority;
pub mod score;
pub mod types;
pub mod weights;

pub use algorithm::MatchingAlgorithm;
pub use mosaic::{
    assign_batch, best_driver_for, best_driver_for_with_config, evaluate_orders, is_eligible,
    BatchAssignment, MosaicMatching,
};
#[cfg(feature = "parallel")]
pub use mosaic::evaluate_orders_parallel;
pub use priority::order_priority;
pub use score::{score, score_breakdown, tier_score, ScoreBreakdown};
pub use types::{DriverCandidate, LoyaltyTier, MatchResult, OrderInfo, VehicleType};
pub use weights::{adjust_weights, MatchingWeights};
