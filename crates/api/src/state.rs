use std::sync::Arc;

use ecoeats_db::DataStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store lives behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The JSON collections.
    pub store: Arc<DataStore>,
}
