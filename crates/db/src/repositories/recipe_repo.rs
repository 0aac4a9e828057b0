//! Repository for the recipe collection.
//!
//! Recipes are read-only through the API; they enter the store through
//! [`RecipeRepo::import`], usually from a seed file at startup.

use std::path::Path;

use ecoeats_core::types::{ItemId, Timestamp};
use uuid::Uuid;

use crate::models::recipe::{CreateRecipe, Recipe};
use crate::{DataStore, StoreError};

pub struct RecipeRepo;

impl RecipeRepo {
    pub async fn list(store: &DataStore) -> Result<Vec<Recipe>, StoreError> {
        store.recipes.load().await
    }

    pub async fn find_by_id(store: &DataStore, id: ItemId) -> Result<Option<Recipe>, StoreError> {
        let recipes = store.recipes.load().await?;
        Ok(recipes.into_iter().find(|r| r.id == id))
    }

    /// Append recipes, assigning fresh ids. Returns how many were added.
    pub async fn import(
        store: &DataStore,
        inputs: Vec<CreateRecipe>,
        now: Timestamp,
    ) -> Result<usize, StoreError> {
        let added = inputs.len();
        store
            .recipes
            .update(move |recipes| {
                recipes.extend(inputs.into_iter().map(|input| Recipe {
                    id: Uuid::new_v4(),
                    name: input.name,
                    cuisine_type: input.cuisine_type,
                    prep_time: input.prep_time,
                    uses_ingredients: input.uses_ingredients,
                    ingredients: input.ingredients,
                    instructions: input.instructions,
                    dietary_tags: input.dietary_tags,
                    created_at: now,
                }));
                Ok::<_, StoreError>(())
            })
            .await?;
        tracing::info!(added, "Recipes imported");
        Ok(added)
    }

    /// Import the recipes in `seed_path` when the collection is still empty.
    ///
    /// Returns the number of recipes imported (zero when the store already
    /// had recipes).
    pub async fn seed_if_empty(
        store: &DataStore,
        seed_path: &Path,
        now: Timestamp,
    ) -> Result<usize, StoreError> {
        if !store.recipes.load().await?.is_empty() {
            tracing::debug!("Recipe store already populated, skipping seed");
            return Ok(0);
        }

        let raw = tokio::fs::read_to_string(seed_path)
            .await
            .map_err(|source| StoreError::io(seed_path, source))?;
        let inputs: Vec<CreateRecipe> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
                path: seed_path.to_path_buf(),
                source,
            })?;

        Self::import(store, inputs, now).await
    }
}
