//! Shared response envelope types for API handlers.
//!
//! Inventory, recipe and dashboard responses use a `{ "data": ... }`
//! envelope. Leftover endpoints return bare records for their browser
//! client.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
