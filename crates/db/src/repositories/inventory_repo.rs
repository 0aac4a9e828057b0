//! Repository for the inventory collection.

use ecoeats_core::error::CoreError;
use ecoeats_core::inventory::{validate_item_fields, validate_resolution, ItemStatus};
use ecoeats_core::shelf_life::ShelfMetrics;
use ecoeats_core::types::{ItemId, Timestamp};
use uuid::Uuid;

use crate::models::inventory::{CreateInventoryItem, InventoryItem, UpdateInventoryItem};
use crate::{DataStore, StoreError};

const ENTITY: &str = "InventoryItem";

/// Provides CRUD and status operations for inventory items.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Every item, including used and discarded ones, in insertion order.
    pub async fn list(store: &DataStore) -> Result<Vec<InventoryItem>, StoreError> {
        store.inventory.load().await
    }

    /// Items still in the pantry.
    pub async fn list_active(store: &DataStore) -> Result<Vec<InventoryItem>, StoreError> {
        let mut items = store.inventory.load().await?;
        items.retain(|i| i.status.is_active());
        Ok(items)
    }

    pub async fn find_by_id(
        store: &DataStore,
        id: ItemId,
    ) -> Result<Option<InventoryItem>, StoreError> {
        let items = store.inventory.load().await?;
        Ok(items.into_iter().find(|i| i.id == id))
    }

    /// Record a new item, deriving its day counts relative to `now`.
    pub async fn create(
        store: &DataStore,
        input: &CreateInventoryItem,
        now: Timestamp,
    ) -> Result<InventoryItem, StoreError> {
        let purchase_date = input.purchase_date.unwrap_or(now);
        let metrics = ShelfMetrics::compute(purchase_date, input.expiration_date, now);

        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            category: input.category.trim().to_string(),
            quantity: input.quantity,
            purchase_date,
            expiration_date: input.expiration_date,
            days_until_expiration: metrics.days_until_expiration,
            total_shelf_life: metrics.total_shelf_life,
            status: ItemStatus::Active,
            created_at: now,
            resolved_at: None,
        };

        let created = item.clone();
        store
            .inventory
            .update(move |items| {
                items.push(item);
                Ok::<_, StoreError>(())
            })
            .await?;

        tracing::info!(id = %created.id, name = %created.name, "Inventory item created");
        Ok(created)
    }

    /// Apply a partial update. Day counts are re-derived when a date changes.
    ///
    /// The merged name, category and quantity are validated against the
    /// stored record while the write lock is held; nothing is written when
    /// they are rejected.
    pub async fn update(
        store: &DataStore,
        id: ItemId,
        input: &UpdateInventoryItem,
        now: Timestamp,
    ) -> Result<InventoryItem, StoreError> {
        store
            .inventory
            .update(|items| {
                let item = items
                    .iter_mut()
                    .find(|i| i.id == id)
                    .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

                validate_item_fields(
                    input.name.as_deref().unwrap_or(&item.name),
                    input.category.as_deref().unwrap_or(&item.category),
                    input.quantity.unwrap_or(item.quantity),
                )?;

                if let Some(name) = &input.name {
                    item.name = name.trim().to_string();
                }
                if let Some(category) = &input.category {
                    item.category = category.trim().to_string();
                }
                if let Some(quantity) = input.quantity {
                    item.quantity = quantity;
                }
                if let Some(purchase_date) = input.purchase_date {
                    item.purchase_date = purchase_date;
                }
                if let Some(expiration_date) = input.expiration_date {
                    item.expiration_date = expiration_date;
                }
                if input.changes_dates() {
                    let metrics = ShelfMetrics::compute(item.purchase_date, item.expiration_date, now);
                    item.days_until_expiration = metrics.days_until_expiration;
                    item.total_shelf_life = metrics.total_shelf_life;
                }

                Ok::<_, StoreError>(item.clone())
            })
            .await
    }

    /// Permanently remove an item.
    pub async fn delete(store: &DataStore, id: ItemId) -> Result<(), StoreError> {
        store
            .inventory
            .update(|items| {
                let before = items.len();
                items.retain(|i| i.id != id);
                if items.len() == before {
                    return Err(StoreError::from(CoreError::not_found(ENTITY, id)));
                }
                Ok(())
            })
            .await?;
        tracing::info!(%id, "Inventory item deleted");
        Ok(())
    }

    /// Mark an active item as used or discarded.
    pub async fn resolve(
        store: &DataStore,
        id: ItemId,
        status: ItemStatus,
        now: Timestamp,
    ) -> Result<InventoryItem, StoreError> {
        let resolved = store
            .inventory
            .update(|items| {
                let item = items
                    .iter_mut()
                    .find(|i| i.id == id)
                    .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
                validate_resolution(item.status, status)?;
                item.status = status;
                item.resolved_at = Some(now);
                Ok::<_, StoreError>(item.clone())
            })
            .await?;
        tracing::info!(%id, status = status.as_str(), "Inventory item resolved");
        Ok(resolved)
    }
}
