//! Brand entity model and DTOs.

use brandhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A brand row from the `brands` table.
///
/// The slug is derived from the name at creation and never recomputed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new brand. The slug is derived server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBrand {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for updating a brand. Only non-`None` fields are applied;
/// the slug is deliberately not updatable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBrand {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A row from the `brands_with_assets` view: the brand plus all of its
/// assets nested as a JSON array, newest first.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrandWithAssets {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub assets_json: serde_json::Value,
}
