//! Leftover item model and DTOs.

use ecoeats_core::leftover::LeftoverStatus;
use ecoeats_core::types::{Date, LeftoverId};
use serde::{Deserialize, Serialize};

/// A leftover tracked in `leftovers.json`.
///
/// Quantity, size and price are kept exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeftoverItem {
    pub id: LeftoverId,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub size: String,
    pub price: String,
    pub purchase_date: Date,
    pub expiration_date: Date,
    pub status: LeftoverStatus,
}

/// DTO for recording a leftover. Missing text fields become empty strings;
/// `purchase_date` defaults to today.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLeftover {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub purchase_date: Option<Date>,
}

/// DTO for `PUT /leftovers/{id}`.
///
/// The status arrives as text and is checked with
/// [`LeftoverStatus::from_str_value`] so unknown values get a validation
/// error naming the accepted ones.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeftoverStatus {
    pub status: String,
}
