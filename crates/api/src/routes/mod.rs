pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod leftovers;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /inventory                        list, create
/// /inventory/expiring               items expiring within N days
/// /inventory/categories             distinct categories
/// /inventory/{id}                   get, update, delete
/// /inventory/{id}/mark-used         resolve as used (POST)
/// /inventory/{id}/mark-discarded    resolve as discarded (POST)
///
/// /recipes                          list with filters
/// /recipes/facets                   cuisines and dietary tags
/// /recipes/suggestions              ranked by expiring inventory
/// /recipes/{id}                     get
///
/// /dashboard                        pantry overview
///
/// /leftovers                        list, create
/// /leftovers/history                used and trashed
/// /leftovers/summary                status counts
/// /leftovers/{id}                   update status, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/recipes", recipes::router())
        .nest("/dashboard", dashboard::router())
        .nest("/leftovers", leftovers::router())
}
