//! Handlers for the `/inventory` resource.
//!
//! Every item returned here carries its freshness evaluation (tier, badge,
//! bar percentage and label) next to the stored fields.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use ecoeats_core::error::CoreError;
use ecoeats_core::freshness::{Freshness, WARNING_MAX_DAYS};
use ecoeats_core::inventory::{validate_item_fields, ItemStatus};
use ecoeats_core::query::{
    distinct_categories, expiring_within, parse_multi_select, query_inventory, InventoryFilter,
    SortOrder,
};
use ecoeats_core::shelf_life::validate_expiration_not_past;
use ecoeats_core::types::ItemId;
use ecoeats_db::models::inventory::{CreateInventoryItem, InventoryItem, UpdateInventoryItem};
use ecoeats_db::repositories::InventoryRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "InventoryItem";

/// An inventory item as returned by the API.
#[derive(Debug, Serialize)]
pub struct InventoryItemView {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub freshness: Freshness,
}

impl From<InventoryItem> for InventoryItemView {
    fn from(item: InventoryItem) -> Self {
        let freshness = Freshness::evaluate(item.days_until_expiration, item.total_shelf_life);
        Self { item, freshness }
    }
}

/// Query parameters for the inventory listing.
#[derive(Debug, Deserialize)]
pub struct InventoryListParams {
    pub search: Option<String>,
    /// Comma-separated category names.
    pub categories: Option<String>,
    pub sort: Option<String>,
    /// Include used and discarded items.
    #[serde(default)]
    pub include_resolved: bool,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    pub within_days: Option<i64>,
}

/// GET /api/v1/inventory
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<InventoryListParams>,
) -> AppResult<Json<DataResponse<Vec<InventoryItemView>>>> {
    let sort = params
        .sort
        .as_deref()
        .map(SortOrder::from_str_value)
        .transpose()?
        .unwrap_or_default();

    let items = if params.include_resolved {
        InventoryRepo::list(&state.store).await?
    } else {
        InventoryRepo::list_active(&state.store).await?
    };

    let filter = InventoryFilter {
        search: params.search.unwrap_or_default(),
        categories: parse_multi_select(params.categories.as_deref()),
    };
    let data = query_inventory(&items, &filter, sort)
        .into_iter()
        .cloned()
        .map(InventoryItemView::from)
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/inventory/expiring
///
/// Active items expiring within `within_days` days (default 5), soonest first.
pub async fn list_expiring(
    State(state): State<AppState>,
    Query(params): Query<ExpiringParams>,
) -> AppResult<Json<DataResponse<Vec<InventoryItemView>>>> {
    let within_days = params.within_days.unwrap_or(WARNING_MAX_DAYS);
    if within_days < 0 {
        return Err(AppError::BadRequest(format!(
            "within_days must not be negative, got {within_days}"
        )));
    }

    let items = InventoryRepo::list_active(&state.store).await?;
    let data = expiring_within(&items, within_days)
        .into_iter()
        .cloned()
        .map(InventoryItemView::from)
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/inventory/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let items = InventoryRepo::list_active(&state.store).await?;
    Ok(Json(DataResponse {
        data: distinct_categories(&items),
    }))
}

/// GET /api/v1/inventory/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<DataResponse<InventoryItemView>>> {
    let item = InventoryRepo::find_by_id(&state.store, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: item.into() }))
}

/// POST /api/v1/inventory
pub async fn create_item(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<DataResponse<InventoryItemView>>)> {
    input.validate()?;
    validate_item_fields(&input.name, &input.category, input.quantity)?;
    let now = Utc::now();
    validate_expiration_not_past(input.expiration_date, now)?;

    let item = InventoryRepo::create(&state.store, &input, now).await?;
    let view = InventoryItemView::from(item);
    tracing::debug!(
        id = %view.item.id,
        tier = view.freshness.tier.as_str(),
        days = view.item.days_until_expiration,
        "Evaluated freshness of new item"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/v1/inventory/{id}
///
/// Partial update. The merged record must still satisfy the create rules;
/// the repository checks it under the store's write lock.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    AppJson(input): AppJson<UpdateInventoryItem>,
) -> AppResult<Json<DataResponse<InventoryItemView>>> {
    input.validate()?;
    let now = Utc::now();

    if let Some(expiration_date) = input.expiration_date {
        validate_expiration_not_past(expiration_date, now)?;
    }

    let item = InventoryRepo::update(&state.store, id, &input, now).await?;
    Ok(Json(DataResponse { data: item.into() }))
}

/// DELETE /api/v1/inventory/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<StatusCode> {
    InventoryRepo::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/inventory/{id}/mark-used
pub async fn mark_used(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<DataResponse<InventoryItemView>>> {
    resolve(&state, id, ItemStatus::Used).await
}

/// POST /api/v1/inventory/{id}/mark-discarded
pub async fn mark_discarded(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<DataResponse<InventoryItemView>>> {
    resolve(&state, id, ItemStatus::Discarded).await
}

// ── Private helpers ──────────────────────────────────────────────────────

async fn resolve(
    state: &AppState,
    id: ItemId,
    status: ItemStatus,
) -> AppResult<Json<DataResponse<InventoryItemView>>> {
    let item = InventoryRepo::resolve(&state.store, id, status, Utc::now()).await?;
    Ok(Json(DataResponse { data: item.into() }))
}
