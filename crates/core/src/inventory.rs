//! Inventory item lifecycle.
//!
//! An item is `active` from the moment it is recorded until it is either
//! used up or thrown away. Only active items appear in the regular inventory
//! views; resolved items are kept so waste can be reported.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_USED: &str = "used";
pub const STATUS_DISCARDED: &str = "discarded";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Active,
    Used,
    Discarded,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => STATUS_ACTIVE,
            Self::Used => STATUS_USED,
            Self::Discarded => STATUS_DISCARDED,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Check that an item in `current` status may be resolved as `next`.
///
/// Only active items can be marked used or discarded, and an item can never
/// go back to active.
pub fn validate_resolution(current: ItemStatus, next: ItemStatus) -> Result<(), CoreError> {
    match (current, next) {
        (_, ItemStatus::Active) => Err(CoreError::Validation(
            "Inventory items cannot be reactivated".to_string(),
        )),
        (ItemStatus::Active, _) => Ok(()),
        (resolved, _) => Err(CoreError::Conflict(format!(
            "Item is already marked {}",
            resolved.as_str()
        ))),
    }
}

/// Validate user-supplied item fields shared by create and update.
pub fn validate_item_fields(name: &str, category: &str, quantity: i32) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    if category.trim().is_empty() {
        return Err(CoreError::Validation("category must not be empty".to_string()));
    }
    if quantity < 1 {
        return Err(CoreError::Validation(format!(
            "quantity must be at least 1, got {quantity}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn status_serializes_as_its_string() {
        for status in [ItemStatus::Active, ItemStatus::Used, ItemStatus::Discarded] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::from(status.as_str())
            );
        }
    }

    #[test]
    fn active_item_can_be_used_or_discarded() {
        assert!(validate_resolution(ItemStatus::Active, ItemStatus::Used).is_ok());
        assert!(validate_resolution(ItemStatus::Active, ItemStatus::Discarded).is_ok());
    }

    #[test]
    fn resolved_item_cannot_be_resolved_again() {
        assert_matches!(
            validate_resolution(ItemStatus::Used, ItemStatus::Discarded),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            validate_resolution(ItemStatus::Discarded, ItemStatus::Discarded),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn reactivation_is_invalid() {
        assert_matches!(
            validate_resolution(ItemStatus::Used, ItemStatus::Active),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn item_fields_require_name_category_and_quantity() {
        assert!(validate_item_fields("Milk", "Dairy", 1).is_ok());
        assert_matches!(validate_item_fields("  ", "Dairy", 1), Err(CoreError::Validation(_)));
        assert_matches!(validate_item_fields("Milk", "", 1), Err(CoreError::Validation(_)));
        assert_matches!(validate_item_fields("Milk", "Dairy", 0), Err(CoreError::Validation(_)));
    }
}
