//! Handlers for the `/leftovers` resource.
//!
//! These endpoints answer with bare records rather than the `data` envelope.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use ecoeats_core::leftover::{LeftoverStatus, LeftoverSummary};
use ecoeats_core::types::LeftoverId;
use ecoeats_db::models::leftover::{CreateLeftover, LeftoverItem, UpdateLeftoverStatus};
use ecoeats_db::repositories::LeftoverRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/v1/leftovers
pub async fn list_leftovers(State(state): State<AppState>) -> AppResult<Json<Vec<LeftoverItem>>> {
    Ok(Json(LeftoverRepo::list(&state.store).await?))
}

/// POST /api/v1/leftovers
///
/// Expiration is always five days after the purchase date.
pub async fn create_leftover(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLeftover>,
) -> AppResult<(StatusCode, Json<LeftoverItem>)> {
    let item = LeftoverRepo::create(&state.store, input, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/leftovers/history
pub async fn list_history(State(state): State<AppState>) -> AppResult<Json<Vec<LeftoverItem>>> {
    Ok(Json(LeftoverRepo::history(&state.store).await?))
}

/// GET /api/v1/leftovers/summary
pub async fn get_summary(State(state): State<AppState>) -> AppResult<Json<LeftoverSummary>> {
    Ok(Json(LeftoverRepo::summary(&state.store).await?))
}

/// PUT /api/v1/leftovers/{id}
///
/// Returns 400 for an unknown status and 409 when moving between `used`
/// and `trashed`.
pub async fn update_leftover(
    State(state): State<AppState>,
    Path(id): Path<LeftoverId>,
    AppJson(input): AppJson<UpdateLeftoverStatus>,
) -> AppResult<Json<LeftoverItem>> {
    let status = LeftoverStatus::from_str_value(input.status.trim())?;
    let item = LeftoverRepo::update_status(&state.store, id, status).await?;
    Ok(Json(item))
}

/// DELETE /api/v1/leftovers/{id}
pub async fn delete_leftover(
    State(state): State<AppState>,
    Path(id): Path<LeftoverId>,
) -> AppResult<StatusCode> {
    LeftoverRepo::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
