//! Route definitions for the `/assets` resource.
//!
//! Upload and listing live under `/brands/{brand_id}/assets`; deletion
//! addresses the asset row directly.

use axum::routing::delete;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// DELETE /{id}  -> delete_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(assets::delete_asset))
}
