//! Repository for the `brands` table and the `brands_with_assets` view.

use brandhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::brand::{Brand, BrandWithAssets, CreateBrand, UpdateBrand};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, created_at, updated_at";

/// Provides CRUD operations for brands.
pub struct BrandRepo;

impl BrandRepo {
    /// Insert a new brand with a pre-derived slug, returning the created row.
    ///
    /// Fails with a unique-constraint violation (`uq_brands_slug`) if a
    /// brand with the same slug already exists.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBrand,
        slug: &str,
    ) -> Result<Brand, sqlx::Error> {
        let query = format!(
            "INSERT INTO brands (name, slug, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a brand by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = $1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all brands ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands ORDER BY name ASC");
        sqlx::query_as::<_, Brand>(&query).fetch_all(pool).await
    }

    /// Update a brand's name and/or description, refreshing `updated_at`.
    ///
    /// The slug is deliberately not recomputed. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBrand,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!(
            "UPDATE brands SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a brand by ID. Returns `true` if a row was removed.
    ///
    /// Asset rows referencing the brand are removed by the store-level
    /// cascade; their blobs are not touched here.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Read the denormalized export row for a brand: the brand itself
    /// plus all of its assets nested as JSON, newest first.
    pub async fn export_bundle(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BrandWithAssets>, sqlx::Error> {
        sqlx::query_as::<_, BrandWithAssets>(
            "SELECT id, name, slug, description, created_at, updated_at, assets_json
             FROM brands_with_assets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
