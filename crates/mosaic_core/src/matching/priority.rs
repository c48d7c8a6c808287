//! Order urgency, used by callers to decide which orders to match first.

use chrono::NaiveDateTime;

use super::types::OrderInfo;

/// Value above which an order earns a first value bonus (minor units).
pub const HIGH_VALUE_THRESHOLD: i64 = 20_000;

/// Value above which an order earns a second value bonus (minor units).
pub const PREMIUM_VALUE_THRESHOLD: i64 = 50_000;

/// Minutes the order has been waiting at `now`. Negative when `now` precedes
/// creation.
pub fn elapsed_minutes(order: &OrderInfo, now: NaiveDateTime) -> f64 {
    (now - order.created_at).num_milliseconds() as f64 / 60_000.0
}

/// Urgency score in `[0, 100]`.
///
/// `priority × 10`, plus 50 / 30 / 15 once the wait reaches 100% / 70% / 50%
/// of `max_wait_minutes`, plus 10 above 20 000 minor units and another 10
/// above 50 000.
pub fn order_priority(order: &OrderInfo, now: NaiveDateTime) -> u32 {
    let base = order.priority as f64 * 10.0;

    let elapsed = elapsed_minutes(order, now);
    let wait_fraction = if order.max_wait_minutes == 0 {
        1.0
    } else {
        elapsed / order.max_wait_minutes as f64
    };
    let wait_bonus = if wait_fraction >= 1.0 {
        50.0
    } else if wait_fraction >= 0.7 {
        30.0
    } else if wait_fraction >= 0.5 {
        15.0
    } else {
        0.0
    };

    let mut value_bonus = 0.0;
    if order.value > HIGH_VALUE_THRESHOLD {
        value_bonus += 10.0;
    }
    if order.value > PREMIUM_VALUE_THRESHOLD {
        value_bonus += 10.0;
    }

    (base + wait_bonus + value_bonus).clamp(0.0, 100.0) as u32
}
