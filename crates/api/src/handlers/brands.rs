//! Handlers for the `/brands` resource, including the JSON export.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use brandhub_core::error::CoreError;
use brandhub_core::slug::brand_slug;
use brandhub_core::types::DbId;
use brandhub_db::models::brand::{Brand, CreateBrand, UpdateBrand};
use brandhub_db::repositories::BrandRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/brands
///
/// List all brands, ordered by name.
pub async fn list_brands(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Brand>>>> {
    let brands = BrandRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: brands }))
}

/// POST /api/v1/brands
///
/// Create a brand. The slug is derived from the name server-side and
/// must be unique; a duplicate returns 409.
pub async fn create_brand(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateBrand>,
) -> AppResult<(StatusCode, Json<DataResponse<Brand>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let slug = brand_slug(&input.name);
    let brand = BrandRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(brand_id = brand.id, slug = %brand.slug, "Brand created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: brand })))
}

/// GET /api/v1/brands/{id}
pub async fn get_brand(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Brand>>> {
    let brand = BrandRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Brand",
            id,
        })?;
    Ok(Json(DataResponse { data: brand }))
}

/// PUT /api/v1/brands/{id}
///
/// Rename or re-describe a brand. The slug stays fixed so stored asset
/// URLs and export filenames remain stable.
pub async fn update_brand(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBrand>,
) -> AppResult<Json<DataResponse<Brand>>> {
    if let Some(name) = &input.name {
        if name.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "name must not be empty".into(),
            )));
        }
    }

    let brand = BrandRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Brand",
            id,
        })?;

    Ok(Json(DataResponse { data: brand }))
}

/// DELETE /api/v1/brands/{id}
///
/// Delete a brand. Asset rows go with it via the cascade; blobs stay in
/// the bucket (single-asset delete is the path that removes blobs).
pub async fn delete_brand(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BrandRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Brand",
            id,
        }));
    }
    tracing::info!(brand_id = id, "Brand deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/brands/{id}/export
///
/// Download the brand's asset list as a pretty-printed JSON attachment
/// named `{slug}-assets.json`. A brand with no assets exports `[]`.
pub async fn export_brand_assets(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let bundle = BrandRepo::export_bundle(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Brand",
            id,
        })?;

    let body = serde_json::to_string_pretty(&bundle.assets_json)
        .map_err(|e| AppError::InternalError(format!("Export serialization error: {e}")))?;

    let disposition = format!("attachment; filename=\"{}-assets.json\"", bundle.slug);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
