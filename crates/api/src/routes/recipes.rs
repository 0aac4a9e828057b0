//! Route definitions for the `/recipes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipe;
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET /               -> list_recipes (?search=&cuisines=&dietary=)
/// GET /facets         -> get_facets
/// GET /suggestions    -> list_suggestions (?limit=)
/// GET /{id}           -> get_recipe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipe::list_recipes))
        .route("/facets", get(recipe::get_facets))
        .route("/suggestions", get(recipe::list_suggestions))
        .route("/{id}", get(recipe::get_recipe))
}
