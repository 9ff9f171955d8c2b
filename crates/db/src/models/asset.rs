//! Asset entity model and DTOs.

use brandhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed enumeration of asset categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Logo,
    Image,
    Font,
    Template,
}

impl AssetKind {
    /// Database / storage-key segment value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Image => "image",
            Self::Font => "font",
            Self::Template => "template",
        }
    }

    /// Parse from the wire value used in upload forms.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "logo" => Some(Self::Logo),
            "image" => Some(Self::Image),
            "font" => Some(Self::Font),
            "template" => Some(Self::Template),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An asset row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub brand_id: DbId,
    /// Original filename as uploaded; the storage key embeds a timestamp
    /// prefix in addition to this.
    pub filename: String,
    pub kind: AssetKind,
    pub file_url: String,
    pub file_size: i64,
    pub usage_note: String,
    pub uploaded_at: Timestamp,
}

/// Metadata for a newly uploaded asset, inserted after the blob write.
#[derive(Debug, Clone)]
pub struct CreateAsset {
    pub brand_id: DbId,
    pub filename: String,
    pub kind: AssetKind,
    pub file_url: String,
    pub file_size: i64,
    pub usage_note: String,
    pub uploaded_at: Timestamp,
}
