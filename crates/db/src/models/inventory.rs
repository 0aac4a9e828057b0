//! Inventory item model and DTOs.

use ecoeats_core::inventory::ItemStatus;
use ecoeats_core::query::StockedItem;
use ecoeats_core::types::{ItemId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// A food item in the pantry.
///
/// `days_until_expiration` and `total_shelf_life` are derived from the two
/// dates when the item is recorded (or when an update changes a date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub purchase_date: Timestamp,
    pub expiration_date: Timestamp,
    pub days_until_expiration: i64,
    pub total_shelf_life: i64,
    #[serde(default)]
    pub status: ItemStatus,
    pub created_at: Timestamp,
    #[serde(default)]
    pub resolved_at: Option<Timestamp>,
}

impl StockedItem for InventoryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn days_until_expiration(&self) -> i64 {
        self.days_until_expiration
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for recording a new item. `purchase_date` defaults to now.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInventoryItem {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "category must be 1-50 characters"))]
    pub category: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    pub purchase_date: Option<Timestamp>,
    pub expiration_date: Timestamp,
}

/// DTO for a partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInventoryItem {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "category must be 1-50 characters"))]
    pub category: Option<String>,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: Option<i32>,
    pub purchase_date: Option<Timestamp>,
    pub expiration_date: Option<Timestamp>,
}

impl UpdateInventoryItem {
    pub fn changes_dates(&self) -> bool {
        self.purchase_date.is_some() || self.expiration_date.is_some()
    }
}
