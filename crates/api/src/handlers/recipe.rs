//! Handlers for the `/recipes` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use ecoeats_core::error::CoreError;
use ecoeats_core::query::{
    distinct_cuisines, distinct_dietary_tags, parse_multi_select, query_recipes, RecipeFilter,
};
use ecoeats_core::recommendation::{clamp_suggestion_limit, suggest_recipes, PantryItem};
use ecoeats_core::types::ItemId;
use ecoeats_db::models::recipe::Recipe;
use ecoeats_db::repositories::{InventoryRepo, RecipeRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecipeListParams {
    pub search: Option<String>,
    /// Comma-separated cuisine names.
    pub cuisines: Option<String>,
    /// Comma-separated dietary tags; a recipe matches if it has any of them.
    pub dietary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub limit: Option<usize>,
}

/// Filter options for the recipe browser.
#[derive(Debug, Serialize)]
pub struct RecipeFacets {
    pub cuisines: Vec<String>,
    pub dietary_tags: Vec<String>,
}

/// A suggested recipe with its ranking scores.
#[derive(Debug, Serialize)]
pub struct RecipeSuggestion {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub urgency: f64,
    pub score: f64,
}

/// GET /api/v1/recipes
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeListParams>,
) -> AppResult<Json<DataResponse<Vec<Recipe>>>> {
    let recipes = RecipeRepo::list(&state.store).await?;
    let filter = RecipeFilter {
        search: params.search.unwrap_or_default(),
        cuisines: parse_multi_select(params.cuisines.as_deref()),
        dietary_tags: parse_multi_select(params.dietary.as_deref()),
    };
    let data = query_recipes(&recipes, &filter).into_iter().cloned().collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/recipes/facets
pub async fn get_facets(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<RecipeFacets>>> {
    let recipes = RecipeRepo::list(&state.store).await?;
    Ok(Json(DataResponse {
        data: RecipeFacets {
            cuisines: distinct_cuisines(&recipes),
            dietary_tags: distinct_dietary_tags(&recipes),
        },
    }))
}

/// GET /api/v1/recipes/suggestions
///
/// Recipes cookable from active inventory, most urgent first.
pub async fn list_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> AppResult<Json<DataResponse<Vec<RecipeSuggestion>>>> {
    let limit = clamp_suggestion_limit(params.limit);
    let data = suggestions(&state, limit).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<DataResponse<Recipe>>> {
    let recipe = RecipeRepo::find_by_id(&state.store, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Recipe", id))?;
    Ok(Json(DataResponse { data: recipe }))
}

/// Rank stored recipes against the active inventory.
pub(crate) async fn suggestions(state: &AppState, limit: usize) -> AppResult<Vec<RecipeSuggestion>> {
    let items = InventoryRepo::list_active(&state.store).await?;
    let recipes = RecipeRepo::list(&state.store).await?;

    let pantry: Vec<PantryItem<'_>> = items
        .iter()
        .map(|i| PantryItem {
            name: &i.name,
            days_until_expiration: i.days_until_expiration,
        })
        .collect();

    let ranked = suggest_recipes(&recipes, &pantry, limit)
        .into_iter()
        .map(|s| RecipeSuggestion {
            recipe: s.recipe.clone(),
            urgency: s.urgency,
            score: s.score,
        })
        .collect::<Vec<_>>();

    tracing::debug!(pantry = pantry.len(), suggested = ranked.len(), "Ranked recipe suggestions");
    Ok(ranked)
}
