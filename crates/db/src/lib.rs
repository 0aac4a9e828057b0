//! File-backed persistence for EcoEats.
//!
//! Each collection lives in its own JSON array file under a data directory.
//! [`DataStore`] bundles the three collections and is what the HTTP layer
//! shares between handlers; the repositories under [`repositories`] hold
//! all record-level operations.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use std::path::Path;

pub use error::StoreError;
pub use store::JsonStore;

use models::inventory::InventoryItem;
use models::leftover::LeftoverItem;
use models::recipe::Recipe;

pub const INVENTORY_FILE: &str = "inventory.json";
pub const RECIPES_FILE: &str = "recipes.json";
pub const LEFTOVERS_FILE: &str = "leftovers.json";

/// All persisted collections.
pub struct DataStore {
    pub inventory: JsonStore<InventoryItem>,
    pub recipes: JsonStore<Recipe>,
    pub leftovers: JsonStore<LeftoverItem>,
}

impl DataStore {
    /// Open (and create if needed) every collection under `data_dir`.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref();
        Ok(Self {
            inventory: JsonStore::open(dir.join(INVENTORY_FILE)).await?,
            recipes: JsonStore::open(dir.join(RECIPES_FILE)).await?,
            leftovers: JsonStore::open(dir.join(LEFTOVERS_FILE)).await?,
        })
    }
}

/// Verify every collection file is readable and well-formed.
pub async fn health_check(store: &DataStore) -> Result<(), StoreError> {
    store.inventory.load().await?;
    store.recipes.load().await?;
    store.leftovers.load().await?;
    Ok(())
}
