//! Scoring weights and their time-of-day adjustment.

use serde::{Deserialize, Serialize};

use crate::period::TimePeriod;

/// Relative importance of each Mosaic sub-score. Weights sum to 1.0 after
/// [`adjust_weights`] unless every weight is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingWeights {
    pub proximity: f64,
    pub rating: f64,
    pub load_balance: f64,
    pub tier_bonus: f64,
    pub acceptance_rate: f64,
    pub specialization: f64,
}

impl Default for MatchingWeights {
    fn default() -> Self {
        Self {
            proximity: 0.30,
            rating: 0.20,
            load_balance: 0.15,
            tier_bonus: 0.10,
            acceptance_rate: 0.15,
            specialization: 0.10,
        }
    }
}

impl MatchingWeights {
    pub fn total(&self) -> f64 {
        self.proximity
            + self.rating
            + self.load_balance
            + self.tier_bonus
            + self.acceptance_rate
            + self.specialization
    }

    /// Weights with their field names, in declaration order.
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("proximity", self.proximity),
            ("rating", self.rating),
            ("load_balance", self.load_balance),
            ("tier_bonus", self.tier_bonus),
            ("acceptance_rate", self.acceptance_rate),
            ("specialization", self.specialization),
        ]
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            proximity: f(self.proximity),
            rating: f(self.rating),
            load_balance: f(self.load_balance),
            tier_bonus: f(self.tier_bonus),
            acceptance_rate: f(self.acceptance_rate),
            specialization: f(self.specialization),
        }
    }

    /// Scale so the weights sum to 1.0. An all-zero set is returned as is.
    pub fn normalized(self) -> Self {
        let total = self.total();
        if total == 0.0 {
            return self;
        }
        self.map(|w| w / total)
    }
}

/// Perturb `base` for the given period, clamp each weight to at most 1.0 and
/// renormalize.
///
/// - Rush hours favour proximity over rating.
/// - Friday prayer favours drivers who accept offers.
/// - Ramadan iftar favours proximity and spreading load.
/// - Night favours rating and loyalty tier.
pub fn adjust_weights(period: TimePeriod, base: &MatchingWeights) -> MatchingWeights {
    let mut w = *base;
    match period {
        TimePeriod::MorningRush | TimePeriod::EveningRush => {
            w.proximity *= 1.5;
            w.rating *= 0.7;
        }
        TimePeriod::FridayPrayer => {
            w.acceptance_rate *= 1.5;
        }
        TimePeriod::RamadanIftar => {
            w.load_balance *= 1.4;
            w.proximity *= 1.3;
        }
        TimePeriod::Night => {
            w.rating *= 1.3;
            w.tier_bonus *= 1.3;
        }
        TimePeriod::Midday | TimePeriod::Afternoon => {}
    }
    w.map(|value| value.min(1.0)).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PERIODS: [TimePeriod; 7] = [
        TimePeriod::MorningRush,
        TimePeriod::Midday,
        TimePeriod::Afternoon,
        TimePeriod::EveningRush,
        TimePeriod::Night,
        TimePeriod::FridayPrayer,
        TimePeriod::RamadanIftar,
    ];

    #[test]
    fn adjusted_weights_sum_to_one() {
        let base = MatchingWeights::default();
        for period in ALL_PERIODS {
            let adjusted = adjust_weights(period, &base);
            assert!((adjusted.total() - 1.0).abs() < 1e-9, "{period:?}");
        }
    }

    #[test]
    fn rush_favours_proximity_over_rating() {
        let base = MatchingWeights::default();
        let rush = adjust_weights(TimePeriod::MorningRush, &base);
        assert!(rush.proximity > base.proximity);
        assert!(rush.rating < base.rating);
    }

    #[test]
    fn night_favours_rating_and_tier() {
        let base = MatchingWeights::default();
        let night = adjust_weights(TimePeriod::Night, &base);
        assert!(night.rating > base.rating);
        assert!(night.tier_bonus > base.tier_bonus);
        assert!(night.proximity < base.proximity);
    }

    #[test]
    fn friday_prayer_favours_acceptance() {
        let base = MatchingWeights::default();
        let friday = adjust_weights(TimePeriod::FridayPrayer, &base);
        assert!(friday.acceptance_rate > base.acceptance_rate);
    }

    #[test]
    fn oversized_weights_are_clamped_before_normalizing() {
        let base = MatchingWeights {
            proximity: 5.0,
            rating: 1.0,
            load_balance: 0.0,
            tier_bonus: 0.0,
            acceptance_rate: 0.0,
            specialization: 0.0,
        };
        let adjusted = adjust_weights(TimePeriod::Midday, &base);
        assert!((adjusted.proximity - 0.5).abs() < 1e-12);
        assert!((adjusted.rating - 0.5).abs() < 1e-12);
    }

    #[test]
    fn all_zero_weights_stay_zero() {
        let zero = MatchingWeights {
            proximity: 0.0,
            rating: 0.0,
            load_balance: 0.0,
            tier_bonus: 0.0,
            acceptance_rate: 0.0,
            specialization: 0.0,
        };
        let adjusted = adjust_weights(TimePeriod::EveningRush, &zero);
        assert_eq!(adjusted, zero);
    }
}
