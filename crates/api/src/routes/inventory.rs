//! Route definitions for the `/inventory` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Routes mounted at `/inventory`.
///
/// ```text
/// GET    /                      -> list_items   (?search=&categories=&sort=&include_resolved=)
/// POST   /                      -> create_item
/// GET    /expiring              -> list_expiring (?within_days=)
/// GET    /categories            -> list_categories
/// GET    /{id}                  -> get_item
/// PUT    /{id}                  -> update_item
/// DELETE /{id}                  -> delete_item
/// POST   /{id}/mark-used        -> mark_used
/// POST   /{id}/mark-discarded   -> mark_discarded
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list_items).post(inventory::create_item))
        .route("/expiring", get(inventory::list_expiring))
        .route("/categories", get(inventory::list_categories))
        .route(
            "/{id}",
            get(inventory::get_item)
                .put(inventory::update_item)
                .delete(inventory::delete_item),
        )
        .route("/{id}/mark-used", post(inventory::mark_used))
        .route("/{id}/mark-discarded", post(inventory::mark_discarded))
}
