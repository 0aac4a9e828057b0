//! Freshness evaluation for inventory items.
//!
//! Maps a remaining-days count (and the item's total shelf life) to an
//! expiration tier, a display percentage for progress bars, and the
//! human-readable "expires in" text.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Items with this many days or fewer left are critical.
pub const CRITICAL_MAX_DAYS: i64 = 2;

/// Items with this many days or fewer left (and above critical) are a warning.
pub const WARNING_MAX_DAYS: i64 = 5;

/// Dashboard "use within the next few days" window.
pub const EXPIRING_SOON_DAYS: i64 = 3;

pub const TIER_CRITICAL: &str = "critical";
pub const TIER_WARNING: &str = "warning";
pub const TIER_GOOD: &str = "good";

// ---------------------------------------------------------------------------
// Expiration tier
// ---------------------------------------------------------------------------

/// Urgency bucket derived from days until expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationTier {
    Critical,
    Warning,
    Good,
}

impl ExpirationTier {
    /// Boundary values fall into the more urgent tier.
    pub fn from_days(days_until_expiration: i64) -> Self {
        if days_until_expiration <= CRITICAL_MAX_DAYS {
            Self::Critical
        } else if days_until_expiration <= WARNING_MAX_DAYS {
            Self::Warning
        } else {
            Self::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => TIER_CRITICAL,
            Self::Warning => TIER_WARNING,
            Self::Good => TIER_GOOD,
        }
    }

    /// Short call to action shown on item badges.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Self::Critical => "Use now",
            Self::Warning => "Use soon",
            Self::Good => "Fresh",
        }
    }
}

// ---------------------------------------------------------------------------
// Percentage and label
// ---------------------------------------------------------------------------

/// Remaining shelf life as a percentage in `[0, 100]`.
///
/// A non-positive `total_shelf_life` is treated as one day.
pub fn freshness_percentage(days_until_expiration: i64, total_shelf_life: i64) -> f64 {
    let shelf_life = total_shelf_life.max(1) as f64;
    (100.0 * days_until_expiration as f64 / shelf_life).clamp(0.0, 100.0)
}

/// Display text for the remaining days.
///
/// Overdue items read as "Expired ..." rather than a negative count.
pub fn expiry_label(days_until_expiration: i64) -> String {
    match days_until_expiration {
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        -1 => "Expired yesterday".to_string(),
        d if d < 0 => format!("Expired {} days ago", -d),
        d => format!("Expires in {d} days"),
    }
}

/// Everything a list row needs to render an item's freshness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Freshness {
    pub tier: ExpirationTier,
    pub badge: &'static str,
    pub percentage: f64,
    pub label: String,
}

impl Freshness {
    pub fn evaluate(days_until_expiration: i64, total_shelf_life: i64) -> Self {
        let tier = ExpirationTier::from_days(days_until_expiration);
        Self {
            tier,
            badge: tier.badge_label(),
            percentage: freshness_percentage(days_until_expiration, total_shelf_life),
            label: expiry_label(days_until_expiration),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
