//! Leftover status lifecycle and summaries.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const LEFTOVER_ACTIVE: &str = "active";
pub const LEFTOVER_USED: &str = "used";
pub const LEFTOVER_TRASHED: &str = "trashed";

pub const VALID_LEFTOVER_STATUSES: &[&str] = &[LEFTOVER_ACTIVE, LEFTOVER_USED, LEFTOVER_TRASHED];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftoverStatus {
    #[default]
    Active,
    Used,
    Trashed,
}

impl LeftoverStatus {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            LEFTOVER_ACTIVE => Ok(Self::Active),
            LEFTOVER_USED => Ok(Self::Used),
            LEFTOVER_TRASHED => Ok(Self::Trashed),
            _ => Err(CoreError::Validation(format!(
                "Invalid leftover status '{s}'. Must be one of: {}",
                VALID_LEFTOVER_STATUSES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => LEFTOVER_ACTIVE,
            Self::Used => LEFTOVER_USED,
            Self::Trashed => LEFTOVER_TRASHED,
        }
    }

    /// Used and trashed leftovers make up the history view.
    pub fn is_history(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Check a status change requested for a leftover.
///
/// `active -> used` and `active -> trashed` are the only real transitions.
/// Re-applying the current status is accepted as a no-op.
pub fn validate_transition(current: LeftoverStatus, next: LeftoverStatus) -> Result<(), CoreError> {
    if current == next || current == LeftoverStatus::Active {
        return Ok(());
    }
    Err(CoreError::Conflict(format!(
        "Cannot change leftover status from {} to {}",
        current.as_str(),
        next.as_str()
    )))
}

/// Per-status leftover counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeftoverSummary {
    pub active: usize,
    pub used: usize,
    pub trashed: usize,
}

impl LeftoverSummary {
    pub fn from_statuses(statuses: impl IntoIterator<Item = LeftoverStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self::default(), |mut acc, status| {
                match status {
                    LeftoverStatus::Active => acc.active += 1,
                    LeftoverStatus::Used => acc.used += 1,
                    LeftoverStatus::Trashed => acc.trashed += 1,
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn active_can_move_to_used_or_trashed() {
        assert!(validate_transition(LeftoverStatus::Active, LeftoverStatus::Used).is_ok());
        assert!(validate_transition(LeftoverStatus::Active, LeftoverStatus::Trashed).is_ok());
    }

    #[test]
    fn same_status_is_a_no_op() {
        assert!(validate_transition(LeftoverStatus::Trashed, LeftoverStatus::Trashed).is_ok());
    }

    #[test]
    fn resolved_leftovers_cannot_change() {
        assert_matches!(
            validate_transition(LeftoverStatus::Used, LeftoverStatus::Trashed),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            validate_transition(LeftoverStatus::Trashed, LeftoverStatus::Active),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(LeftoverStatus::from_str_value("used").unwrap(), LeftoverStatus::Used);
        assert_matches!(
            LeftoverStatus::from_str_value("gone"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn summary_counts_each_status() {
        let summary = LeftoverSummary::from_statuses([
            LeftoverStatus::Active,
            LeftoverStatus::Used,
            LeftoverStatus::Active,
            LeftoverStatus::Trashed,
        ]);
        assert_eq!(
            summary,
            LeftoverSummary {
                active: 2,
                used: 1,
                trashed: 1,
            }
        );
    }
}
