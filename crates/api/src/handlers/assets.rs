//! Handlers for asset upload, listing, and deletion.
//!
//! Uploads are multipart: a `kind` text field must arrive before any
//! file part, and an optional `usage` field applies to every file in
//! the batch. Files are written one at a time; the first failure stops
//! the batch and already-written assets are kept.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::assets::{key_from_public_url, storage_key, validate_upload_filename};
use brandhub_core::error::CoreError;
use brandhub_core::types::DbId;
use brandhub_db::models::asset::{Asset, AssetKind, CreateAsset};
use brandhub_db::repositories::{AssetRepo, BrandRepo};
use brandhub_storage::ObjectStore;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/brands/{brand_id}/assets
///
/// List a brand's assets, newest upload first.
pub async fn list_assets(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(brand_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    ensure_brand_exists(&state, brand_id).await?;
    let assets = AssetRepo::list_by_brand(&state.pool, brand_id).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/brands/{brand_id}/assets
///
/// Upload one or more files for a brand. Each file is stored under
/// `{brand_id}/{kind}/{epoch_ms}-{filename}` and recorded with the
/// public URL the blob is served from. Returns the created rows in
/// upload order.
pub async fn upload_assets(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(brand_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Asset>>>)> {
    ensure_brand_exists(&state, brand_id).await?;

    let mut kind: Option<AssetKind> = None;
    let mut usage_note = String::new();
    let mut created: Vec<Asset> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        // File parts carry a filename; everything else is a text field.
        if let Some(filename) = field.file_name() {
            let filename = filename.to_string();
            let kind = kind.ok_or_else(|| {
                AppError::BadRequest(
                    "The 'kind' field must precede file parts in the upload form".into(),
                )
            })?;

            validate_upload_filename(&filename)?;

            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file part: {e}")))?;
            let file_size = bytes.len() as i64;

            let uploaded_at = Utc::now();
            let key = storage_key(
                brand_id,
                kind.as_str(),
                uploaded_at.timestamp_millis(),
                &filename,
            );

            state.store.put(&key, bytes.to_vec()).await?;
            let file_url = state.store.public_url(&key);

            let asset = AssetRepo::create(
                &state.pool,
                &CreateAsset {
                    brand_id,
                    filename,
                    kind,
                    file_url,
                    file_size,
                    usage_note: usage_note.clone(),
                    uploaded_at,
                },
            )
            .await?;

            tracing::info!(asset_id = asset.id, brand_id, key = %key, "Asset uploaded");
            created.push(asset);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read form field: {e}")))?;

            match field_name.as_str() {
                "kind" => {
                    kind = Some(AssetKind::parse(&value).ok_or_else(|| {
                        AppError::Core(CoreError::Validation(format!(
                            "Unknown asset kind '{value}'"
                        )))
                    })?);
                }
                "usage" => usage_note = value,
                _ => {} // unknown text fields are ignored
            }
        }
    }

    if created.is_empty() {
        return Err(AppError::BadRequest(
            "Upload form contained no files".into(),
        ));
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// DELETE /api/v1/assets/{id}
///
/// Remove the blob first, then the metadata row. If the blob removal
/// fails the row is kept, so the asset stays visible rather than
/// silently leaking the blob.
pub async fn delete_asset(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Asset",
            id,
        })?;

    let key = key_from_public_url(&asset.file_url, state.store.bucket())?;
    state.store.remove(&[key]).await?;

    AssetRepo::delete(&state.pool, id).await?;

    tracing::info!(asset_id = id, "Asset deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// 404 unless the brand exists; upload and list both need the check
/// since assets are nested under the brand path.
async fn ensure_brand_exists(state: &AppState, brand_id: DbId) -> AppResult<()> {
    BrandRepo::find_by_id(&state.pool, brand_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Brand",
            id: brand_id,
        })?;
    Ok(())
}
