//! Repository for the `assets` table.

use brandhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, CreateAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, brand_id, filename, kind, file_url, file_size, usage_note, uploaded_at";

/// Provides CRUD operations for asset metadata rows.
///
/// Blob orchestration (upload, removal, URL derivation) happens at the
/// API layer; this repository only touches metadata.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert the metadata row for an uploaded asset, returning it.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (brand_id, filename, kind, file_url, file_size, usage_note, uploaded_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(input.brand_id)
            .bind(&input.filename)
            .bind(input.kind)
            .bind(&input.file_url)
            .bind(input.file_size)
            .bind(&input.usage_note)
            .bind(input.uploaded_at)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assets for a brand, ordered by upload time descending.
    pub async fn list_by_brand(pool: &PgPool, brand_id: DbId) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets
             WHERE brand_id = $1
             ORDER BY uploaded_at DESC, id DESC"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(brand_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an asset metadata row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
