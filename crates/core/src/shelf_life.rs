//! Shelf-life date arithmetic.
//!
//! Day counts are derived once, when an item is recorded, from its purchase
//! and expiration timestamps. Partial days round up so an item expiring
//! later today still counts as one day away until midnight passes.

use chrono::Duration;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::{Date, Timestamp};

const SECONDS_PER_DAY: i64 = 86_400;

/// Leftovers always keep for this many days after purchase.
pub const LEFTOVER_SHELF_DAYS: i64 = 5;

/// Round a duration up to whole days.
///
/// Negative durations round toward zero, matching `ceil` on a real number:
/// `-1.5 days` becomes `-1`.
pub fn ceil_days(duration: Duration) -> i64 {
    let secs = duration.num_seconds();
    -(-secs).div_euclid(SECONDS_PER_DAY)
}

/// Whole days from `now` until `expiration`, never below zero.
pub fn days_until_expiration(expiration: Timestamp, now: Timestamp) -> i64 {
    ceil_days(expiration - now).max(0)
}

/// Whole days between purchase and expiration, never below one.
///
/// The lower bound keeps the freshness percentage well defined for items
/// that expire on the day they were bought.
pub fn total_shelf_life(purchase: Timestamp, expiration: Timestamp) -> i64 {
    ceil_days(expiration - purchase).max(1)
}

/// The two derived day counts stored on an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShelfMetrics {
    pub days_until_expiration: i64,
    pub total_shelf_life: i64,
}

impl ShelfMetrics {
    pub fn compute(purchase: Timestamp, expiration: Timestamp, now: Timestamp) -> Self {
        Self {
            days_until_expiration: days_until_expiration(expiration, now),
            total_shelf_life: total_shelf_life(purchase, expiration),
        }
    }
}

/// Reject expiration dates before today (UTC calendar date).
pub fn validate_expiration_not_past(expiration: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    if expiration.date_naive() < now.date_naive() {
        return Err(CoreError::Validation(format!(
            "expiration_date {} is in the past",
            expiration.date_naive()
        )));
    }
    Ok(())
}

/// Expiration date of a leftover bought on `purchase`.
pub fn leftover_expiration(purchase: Date) -> Date {
    purchase + Duration::days(LEFTOVER_SHELF_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn ceil_days_rounds_partial_days_up() {
        assert_eq!(ceil_days(Duration::hours(1)), 1);
        assert_eq!(ceil_days(Duration::hours(24)), 1);
        assert_eq!(ceil_days(Duration::hours(25)), 2);
        assert_eq!(ceil_days(Duration::zero()), 0);
    }

    #[test]
    fn ceil_days_negative_rounds_toward_zero() {
        assert_eq!(ceil_days(Duration::hours(-36)), -1);
        assert_eq!(ceil_days(Duration::hours(-48)), -2);
    }

    #[test]
    fn days_until_expiration_clamps_at_zero() {
        let now = at(2024, 6, 10, 12);
        assert_eq!(days_until_expiration(at(2024, 6, 8, 0), now), 0);
        assert_eq!(days_until_expiration(at(2024, 6, 13, 12), now), 3);
        assert_eq!(days_until_expiration(at(2024, 6, 13, 13), now), 4);
    }

    #[test]
    fn shelf_life_never_below_one() {
        let day = at(2024, 6, 10, 9);
        assert_eq!(total_shelf_life(day, day), 1);
        assert_eq!(total_shelf_life(at(2024, 6, 12, 0), day), 1);
        assert_eq!(total_shelf_life(day, at(2024, 6, 20, 9)), 10);
    }

    #[test]
    fn metrics_combine_both_counts() {
        let metrics = ShelfMetrics::compute(at(2024, 6, 1, 0), at(2024, 6, 11, 0), at(2024, 6, 8, 0));
        assert_eq!(
            metrics,
            ShelfMetrics {
                days_until_expiration: 3,
                total_shelf_life: 10,
            }
        );
    }

    #[test]
    fn expiration_today_is_accepted() {
        let now = at(2024, 6, 10, 18);
        assert!(validate_expiration_not_past(at(2024, 6, 10, 1), now).is_ok());
    }

    #[test]
    fn expiration_yesterday_is_rejected() {
        let now = at(2024, 6, 10, 0);
        assert_matches!(
            validate_expiration_not_past(at(2024, 6, 9, 23), now),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn leftovers_expire_five_days_after_purchase() {
        let bought = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        assert_eq!(
            leftover_expiration(bought),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
        );
    }
}
