//! Repository for the leftover collection (`leftovers.json`).

use ecoeats_core::error::CoreError;
use ecoeats_core::leftover::{validate_transition, LeftoverStatus, LeftoverSummary};
use ecoeats_core::shelf_life::leftover_expiration;
use ecoeats_core::types::{LeftoverId, Timestamp};

use crate::models::leftover::{CreateLeftover, LeftoverItem};
use crate::{DataStore, StoreError};

const ENTITY: &str = "LeftoverItem";

pub struct LeftoverRepo;

impl LeftoverRepo {
    /// Every leftover in insertion order.
    pub async fn list(store: &DataStore) -> Result<Vec<LeftoverItem>, StoreError> {
        store.leftovers.load().await
    }

    pub async fn find_by_id(
        store: &DataStore,
        id: LeftoverId,
    ) -> Result<Option<LeftoverItem>, StoreError> {
        let items = store.leftovers.load().await?;
        Ok(items.into_iter().find(|i| i.id == id))
    }

    /// Record a leftover. The id is the creation time in milliseconds,
    /// bumped past the largest existing id if two arrive in the same tick.
    pub async fn create(
        store: &DataStore,
        input: CreateLeftover,
        now: Timestamp,
    ) -> Result<LeftoverItem, StoreError> {
        let purchase_date = input.purchase_date.unwrap_or_else(|| now.date_naive());
        let now_ms = now.timestamp_millis();

        let created = store
            .leftovers
            .update(move |items| {
                let id = match items.iter().map(|i| i.id).max() {
                    None => now_ms,
                    Some(max) => max
                        .checked_add(1)
                        .map(|next| now_ms.max(next))
                        .ok_or_else(|| {
                            CoreError::Internal(format!("leftover id overflow after {max}"))
                        })?,
                };

                let item = LeftoverItem {
                    id,
                    name: input.name,
                    category: input.category,
                    quantity: input.quantity,
                    size: input.size,
                    price: input.price,
                    purchase_date,
                    expiration_date: leftover_expiration(purchase_date),
                    status: LeftoverStatus::Active,
                };
                items.push(item.clone());
                Ok::<_, StoreError>(item)
            })
            .await?;

        tracing::info!(id = created.id, name = %created.name, "Leftover created");
        Ok(created)
    }

    /// Change a leftover's status, enforcing the active -> used/trashed rule.
    pub async fn update_status(
        store: &DataStore,
        id: LeftoverId,
        status: LeftoverStatus,
    ) -> Result<LeftoverItem, StoreError> {
        let updated = store
            .leftovers
            .update(|items| {
                let item = items
                    .iter_mut()
                    .find(|i| i.id == id)
                    .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
                validate_transition(item.status, status)?;
                item.status = status;
                Ok::<_, StoreError>(item.clone())
            })
            .await?;
        tracing::info!(id, status = status.as_str(), "Leftover status updated");
        Ok(updated)
    }

    /// Remove a leftover from the file entirely.
    pub async fn delete(store: &DataStore, id: LeftoverId) -> Result<(), StoreError> {
        store
            .leftovers
            .update(|items| {
                let before = items.len();
                items.retain(|i| i.id != id);
                if items.len() == before {
                    return Err(StoreError::from(CoreError::not_found(ENTITY, id)));
                }
                Ok(())
            })
            .await?;
        tracing::info!(id, "Leftover deleted");
        Ok(())
    }

    /// Used and trashed leftovers, most recent purchase first.
    pub async fn history(store: &DataStore) -> Result<Vec<LeftoverItem>, StoreError> {
        let mut items = store.leftovers.load().await?;
        items.retain(|i| i.status.is_history());
        items.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
        Ok(items)
    }

    pub async fn summary(store: &DataStore) -> Result<LeftoverSummary, StoreError> {
        let items = store.leftovers.load().await?;
        Ok(LeftoverSummary::from_statuses(items.iter().map(|i| i.status)))
    }
}
