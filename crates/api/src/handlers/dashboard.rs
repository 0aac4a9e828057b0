//! Handler for the pantry overview.

use axum::extract::State;
use axum::Json;
use ecoeats_core::freshness::{ExpirationTier, EXPIRING_SOON_DAYS};
use ecoeats_core::inventory::ItemStatus;
use ecoeats_core::leftover::LeftoverSummary;
use ecoeats_core::query::{distinct_categories, sort_items, SortOrder};
use ecoeats_db::models::inventory::InventoryItem;
use ecoeats_db::repositories::{InventoryRepo, LeftoverRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::inventory::InventoryItemView;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many of the soonest-expiring items the overview lists.
const SOONEST_LIMIT: usize = 5;

#[derive(Debug, Default, Serialize)]
pub struct TierCounts {
    pub critical: usize,
    pub warning: usize,
    pub good: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    /// Active items.
    pub total_items: usize,
    pub categories: usize,
    pub tiers: TierCounts,
    /// Active items expiring within three days.
    pub expiring_soon: usize,
    pub used_items: usize,
    pub discarded_items: usize,
    pub leftovers: LeftoverSummary,
    pub soonest: Vec<InventoryItemView>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let items = InventoryRepo::list(&state.store).await?;
    let leftovers = LeftoverRepo::summary(&state.store).await?;
    Ok(Json(DataResponse {
        data: summarize(&items, leftovers),
    }))
}

fn summarize(items: &[InventoryItem], leftovers: LeftoverSummary) -> DashboardSummary {
    let active: Vec<InventoryItem> = items
        .iter()
        .filter(|i| i.status.is_active())
        .cloned()
        .collect();

    let mut tiers = TierCounts::default();
    for item in &active {
        match ExpirationTier::from_days(item.days_until_expiration) {
            ExpirationTier::Critical => tiers.critical += 1,
            ExpirationTier::Warning => tiers.warning += 1,
            ExpirationTier::Good => tiers.good += 1,
        }
    }

    let mut soonest: Vec<&InventoryItem> = active.iter().collect();
    sort_items(&mut soonest, SortOrder::Expiring);

    DashboardSummary {
        total_items: active.len(),
        categories: distinct_categories(&active).len(),
        tiers,
        expiring_soon: active
            .iter()
            .filter(|i| i.days_until_expiration <= EXPIRING_SOON_DAYS)
            .count(),
        used_items: items.iter().filter(|i| i.status == ItemStatus::Used).count(),
        discarded_items: items
            .iter()
            .filter(|i| i.status == ItemStatus::Discarded)
            .count(),
        leftovers,
        soonest: soonest
            .into_iter()
            .take(SOONEST_LIMIT)
            .cloned()
            .map(InventoryItemView::from)
            .collect(),
    }
}
