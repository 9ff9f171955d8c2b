//! Route definitions for the `/brands` resource.
//!
//! Also nests asset listing/upload under `/brands/{brand_id}/assets`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, brands};
use crate::state::AppState;

/// Routes mounted at `/brands`.
///
/// ```text
/// GET    /                          -> list_brands
/// POST   /                          -> create_brand
/// GET    /{id}                      -> get_brand
/// PUT    /{id}                      -> update_brand
/// DELETE /{id}                      -> delete_brand
/// GET    /{id}/export               -> export_brand_assets
///
/// GET    /{brand_id}/assets         -> list_assets
/// POST   /{brand_id}/assets         -> upload_assets (multipart)
/// ```
pub fn router() -> Router<AppState> {
    let asset_routes =
        Router::new().route("/", get(assets::list_assets).post(assets::upload_assets));

    Router::new()
        .route("/", get(brands::list_brands).post(brands::create_brand))
        .route(
            "/{id}",
            get(brands::get_brand)
                .put(brands::update_brand)
                .delete(brands::delete_brand),
        )
        .route("/{id}/export", get(brands::export_brand_assets))
        .nest("/{brand_id}/assets", asset_routes)
}
