//! Route definitions for the `/leftovers` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::leftover;
use crate::state::AppState;

/// Routes mounted at `/leftovers`.
///
/// ```text
/// GET    /          -> list_leftovers
/// POST   /          -> create_leftover
/// GET    /history   -> list_history
/// GET    /summary   -> get_summary
/// PUT    /{id}      -> update_leftover
/// DELETE /{id}      -> delete_leftover
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leftover::list_leftovers).post(leftover::create_leftover))
        .route("/history", get(leftover::list_history))
        .route("/summary", get(leftover::get_summary))
        .route(
            "/{id}",
            put(leftover::update_leftover).delete(leftover::delete_leftover),
        )
}
